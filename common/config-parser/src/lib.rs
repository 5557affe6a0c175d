pub mod types;

use std::error;
use std::fs;
use std::io;
use std::path::Path;

use derive_more::{Display, From};
use serde::de;

/// Parse a config from reader.
pub fn parse_reader<R: io::Read, T: de::DeserializeOwned>(r: &mut R) -> Result<T, ParseError> {
    let mut buf = String::new();
    r.read_to_string(&mut buf)?;
    Ok(toml::from_str(&buf)?)
}

pub fn parse_json<R: io::Read, T: de::DeserializeOwned>(r: &mut R) -> Result<T, ParseError> {
    let mut buf = Vec::new();
    r.read_to_end(&mut buf)?;
    Ok(serde_json::from_slice(&buf)?)
}

/// Parse a config from file, TOML unless `is_json` is set.
pub fn parse_file<T: de::DeserializeOwned>(
    name: impl AsRef<Path>,
    is_json: bool,
) -> Result<T, ParseError> {
    let mut f = fs::File::open(name)?;
    if is_json {
        parse_json(&mut f)
    } else {
        parse_reader(&mut f)
    }
}

#[derive(Debug, Display, From)]
pub enum ParseError {
    #[display(fmt = "{}", _0)]
    IO(io::Error),
    #[display(fmt = "{}", _0)]
    Deserialize(toml::de::Error),
    #[display(fmt = "{}", _0)]
    Json(serde_json::Error),
}

impl error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::{parse_file, parse_json, parse_reader, ParseError};
    use serde::Deserialize;
    use stringreader::StringReader;

    use crate::types::Config;

    #[derive(Debug, Deserialize)]
    struct Config2 {
        global_string: Option<String>,
        global_int:    Option<u64>,
    }

    #[test]
    fn test_parse_config() {
        let file_path = "../../devtools/config.toml";
        let config: Config = parse_file(file_path, false).unwrap();
        assert_eq!(config.rpc.url, "http://127.0.0.1:8545");
    }

    #[test]
    fn test_parse_reader() {
        let toml_str = r#"
        global_string = "Best Food"
        global_int = 42
    "#;
        let mut toml_r = StringReader::new(toml_str);
        let config: Config2 = parse_reader(&mut toml_r).unwrap();
        assert_eq!(config.global_string, Some(String::from("Best Food")));
        assert_eq!(config.global_int, Some(42));
    }

    #[test]
    fn test_parse_json() {
        let json_str = r#"{"global_string": "Best Food"}"#;
        let mut json_r = StringReader::new(json_str);
        let config: Config2 = parse_json(&mut json_r).unwrap();
        assert_eq!(config.global_string, Some(String::from("Best Food")));
        assert_eq!(config.global_int, None);
    }

    #[test]
    fn test_parse_missing_file() {
        let res = parse_file::<Config2>("/nonexistent/config.toml", false);
        assert!(matches!(res, Err(ParseError::IO(_))));
    }
}
