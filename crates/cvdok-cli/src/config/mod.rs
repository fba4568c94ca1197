//! Configuration
//!
//! Settings are loaded from `cvdok.toml`, either given explicitly with
//! `--config` or found next to the record file:
//!
//! ```toml
//! [document]
//! locale = "en"
//!
//! [labels]
//! skills = "TECHNICAL SKILLS"
//!
//! [fonts]
//! paths = ["fonts/Inter-Regular.ttf", "fonts/Inter-Bold.ttf"]
//! ```
//!
//! Every table and key is optional.

mod settings;


pub use settings::{DocumentSettings, FontSettings, Settings, SettingsError, CONFIG_FILE_NAME};
