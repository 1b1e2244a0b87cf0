use std::env;
use std::path::PathBuf;

use super::paths::expand_tilde;

/// Environment variable overriding the dictionary root
pub const DICT_DIR_ENV: &str = "DOYO_HOME";

/// Default dictionary root, relative to the working directory
pub const DEFAULT_DICT_DIR: &str = "DictOfYourOwn";

/// Resolve the dictionary root directory
///
/// Precedence: explicit override (the `--root` flag), then `DOYO_HOME`, then
/// `./DictOfYourOwn`. A leading `~/` is expanded in either source.
pub fn get_dict_dir(cli_override: Option<PathBuf>) -> PathBuf {
    resolve_dict_dir(cli_override, env::var_os(DICT_DIR_ENV).map(PathBuf::from))
}

fn resolve_dict_dir(cli_override: Option<PathBuf>, from_env: Option<PathBuf>) -> PathBuf {
    cli_override
        .or(from_env.filter(|p| !p.as_os_str().is_empty()))
        .map(|p| expand_tilde(&p))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DICT_DIR))
}
