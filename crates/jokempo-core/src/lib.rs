#![deny(warnings)]
pub mod game;
pub mod model;

pub struct AppInfo;

impl AppInfo {
    pub const fn name() -> &'static str {
        "Jokempo -1"
    }

    pub const fn data_dir_name() -> &'static str {
        "Jokempo"
    }

    pub const fn statistics_file_name() -> &'static str {
        "pontuacoes.json"
    }

    pub const fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}
