use logopt_model::{LogConfig, OptionDetail, fields};
use serde_json::{Map, Number, Value};
use tracing::{debug, trace, warn};

use crate::error::{ParseError, ParseResult};

/// Parses `text` and adds its option names and detail records to `config`.
///
/// Processing is not atomic. A missing or non-array `log_option` stops before
/// anything is inserted, but a bad `option_details` is only detected after
/// every name from `log_option` has been added. Malformed JSON leaves
/// `config` untouched.
///
/// Wrong-typed array elements are skipped. Detail objects without a string
/// `option_name` are skipped with a warning.
pub fn parse_into(text: &str, config: &mut LogConfig) -> ParseResult<()> {
    let root: Value = serde_json::from_str(text)?;

    let names = root
        .get(fields::LOG_OPTION)
        .and_then(Value::as_array)
        .ok_or_else(|| ParseError::schema(fields::LOG_OPTION))?;

    for (idx, item) in names.iter().enumerate() {
        match item.as_str() {
            Some(name) => {
                config.options.insert(name);
            }
            None => trace!(index = idx, "skipping non-string log_option entry"),
        }
    }

    let details = root
        .get(fields::OPTION_DETAILS)
        .and_then(Value::as_array)
        .ok_or_else(|| ParseError::schema(fields::OPTION_DETAILS))?;

    for (idx, item) in details.iter().enumerate() {
        let Some(obj) = item.as_object() else {
            trace!(index = idx, "skipping non-object option_details entry");
            continue;
        };
        match detail_from_object(obj) {
            Some(detail) => {
                config.details.insert(detail);
            }
            None => warn!(index = idx, "skipping option_details entry without option_name"),
        }
    }

    debug!(
        options = config.options.len(),
        details = config.details.len(),
        "log config parsed"
    );
    Ok(())
}

/// Builds a record from one `option_details` object.
///
/// Returns `None` when the object has no string `option_name`.
fn detail_from_object(obj: &Map<String, Value>) -> Option<OptionDetail> {
    let text = |key: &str| obj.get(key).and_then(Value::as_str).map(str::to_owned);

    let mut detail = OptionDetail::new(text(fields::OPTION_NAME)?);
    detail.logging_enable = text(fields::LOGGING_ENABLE);
    detail.log_line_prefix = text(fields::LOG_LINE_PREFIX);
    detail.log_directory = text(fields::LOG_DIRECTORY);
    detail.log_min_messages = text(fields::LOG_MIN_MESSAGES);
    detail.log_filename = text(fields::LOG_FILENAME);
    detail.log_truncate_on_rotation = text(fields::LOG_TRUNCATE_ON_ROTATION);
    detail.log_rotation_age = text(fields::LOG_ROTATION_AGE);
    detail.log_rotation_size = match obj.get(fields::LOG_ROTATION_SIZE) {
        Some(Value::Number(n)) => Some(integer_of(n)),
        _ => None,
    };
    Some(detail)
}

/// Integer value of a JSON number: fractions truncate toward zero and
/// out-of-range values saturate.
fn integer_of(n: &Number) -> i64 {
    if let Some(i) = n.as_i64() {
        i
    } else if n.as_u64().is_some() {
        i64::MAX
    } else {
        // `as` saturates for floats.
        n.as_f64().map_or(0, |f| f as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> (LogConfig, ParseResult<()>) {
        let mut cfg = LogConfig::default();
        let res = parse_into(text, &mut cfg);
        (cfg, res)
    }

    #[test]
    fn scenario_full_document() {
        let (cfg, res) = parse(
            r#"{"log_option":["a","b"],"option_details":[{"option_name":"a","logging_enable":"on","log_rotation_size":10}]}"#,
        );
        res.unwrap();

        let names: Vec<_> = cfg.options.iter().collect();
        assert_eq!(names, vec!["a", "b"]);

        assert_eq!(cfg.details.len(), 1);
        let a = cfg.details.get("a").unwrap();
        assert_eq!(a.logging_enable.as_deref(), Some("on"));
        assert_eq!(a.log_rotation_size, Some(10));
        assert!(a.log_line_prefix.is_none());
        assert!(a.log_directory.is_none());
        assert!(a.log_min_messages.is_none());
        assert!(a.log_filename.is_none());
        assert!(a.log_truncate_on_rotation.is_none());
        assert!(a.log_rotation_age.is_none());
    }

    #[test]
    fn log_option_not_an_array_stops_before_anything() {
        let (cfg, res) = parse(r#"{"log_option":"not_an_array","option_details":[]}"#);

        let err = res.unwrap_err();
        assert!(matches!(
            err,
            ParseError::SchemaViolation { section: "log_option", partial: None }
        ));
        assert!(cfg.is_empty());
    }

    #[test]
    fn missing_log_option_is_schema_violation() {
        let (cfg, res) = parse(r#"{"option_details":[{"option_name":"a"}]}"#);

        assert_eq!(res.unwrap_err().to_string(), "Invalid log_option");
        assert!(cfg.is_empty());
    }

    #[test]
    fn missing_option_details_keeps_names() {
        let (cfg, res) = parse(r#"{"log_option":["x"]}"#);

        let err = res.unwrap_err();
        assert_eq!(err.to_string(), "Invalid option_details");
        assert!(cfg.options.contains("x"));
        assert_eq!(cfg.options.len(), 1);
        assert!(cfg.details.is_empty());
    }

    #[test]
    fn option_details_wrong_shape_keeps_names() {
        let (cfg, res) = parse(r#"{"log_option":["x","y"],"option_details":{"option_name":"x"}}"#);

        assert!(matches!(
            res,
            Err(ParseError::SchemaViolation { section: "option_details", .. })
        ));
        assert_eq!(cfg.options.len(), 2);
        assert!(cfg.details.is_empty());
    }

    #[test]
    fn malformed_json_leaves_config_untouched() {
        let (cfg, res) = parse("{not json");

        assert!(matches!(res, Err(ParseError::MalformedInput(_))));
        assert!(cfg.is_empty());
    }

    #[test]
    fn non_object_root_is_schema_violation() {
        for text in ["[]", "42", "\"text\"", "null"] {
            let (cfg, res) = parse(text);
            assert!(
                matches!(res, Err(ParseError::SchemaViolation { section: "log_option", .. })),
                "expected schema violation for {text:?}"
            );
            assert!(cfg.is_empty());
        }
    }

    #[test]
    fn rotation_size_as_string_is_left_unset() {
        let (cfg, res) = parse(
            r#"{"log_option":[],"option_details":[{"option_name":"a","log_rotation_size":"10MB"}]}"#,
        );
        res.unwrap();

        let a = cfg.details.get("a").unwrap();
        assert!(a.log_rotation_size.is_none());
        assert_eq!(a.rotation_size(), 0);
    }

    #[test]
    fn wrong_typed_string_fields_are_left_unset() {
        let (cfg, res) = parse(
            r#"{"log_option":[],"option_details":[{
                "option_name":"a",
                "logging_enable":true,
                "log_directory":["/var/log"],
                "log_filename":null,
                "log_min_messages":3,
                "log_line_prefix":"%m [%p] "
            }]}"#,
        );
        res.unwrap();

        let a = cfg.details.get("a").unwrap();
        assert!(a.logging_enable.is_none());
        assert!(a.log_directory.is_none());
        assert!(a.log_filename.is_none());
        assert!(a.log_min_messages.is_none());
        assert_eq!(a.log_line_prefix.as_deref(), Some("%m [%p] "));
    }

    #[test]
    fn all_fields_are_copied() {
        let (cfg, res) = parse(
            r#"{"log_option":["pg"],"option_details":[{
                "option_name":"pg",
                "logging_enable":"on",
                "log_line_prefix":"%t ",
                "log_directory":"log",
                "log_min_messages":"warning",
                "log_filename":"postgresql-%a.log",
                "log_truncate_on_rotation":"on",
                "log_rotation_age":"1d",
                "log_rotation_size":0
            }]}"#,
        );
        res.unwrap();

        let pg = cfg.details.get("pg").unwrap();
        assert_eq!(pg.option_name(), "pg");
        assert_eq!(pg.logging_enable.as_deref(), Some("on"));
        assert_eq!(pg.log_line_prefix.as_deref(), Some("%t "));
        assert_eq!(pg.log_directory.as_deref(), Some("log"));
        assert_eq!(pg.log_min_messages.as_deref(), Some("warning"));
        assert_eq!(pg.log_filename.as_deref(), Some("postgresql-%a.log"));
        assert_eq!(pg.log_truncate_on_rotation.as_deref(), Some("on"));
        assert_eq!(pg.log_rotation_age.as_deref(), Some("1d"));
        assert_eq!(pg.log_rotation_size, Some(0));
    }

    #[test]
    fn non_string_names_and_non_object_details_are_skipped() {
        let (cfg, res) = parse(
            r#"{"log_option":["a",1,null,{"x":1},"b",["c"]],
                "option_details":["a",7,null,{"option_name":"b"},[{"option_name":"c"}]]}"#,
        );
        res.unwrap();

        let names: Vec<_> = cfg.options.iter().collect();
        assert_eq!(names, vec!["a", "b"]);

        assert_eq!(cfg.details.len(), 1);
        assert!(cfg.details.contains("b"));
    }

    #[test]
    fn detail_without_option_name_is_skipped() {
        let (cfg, res) = parse(
            r#"{"log_option":[],"option_details":[
                {"logging_enable":"on"},
                {"option_name":5,"logging_enable":"off"},
                {"option_name":"kept"}
            ]}"#,
        );
        res.unwrap();

        assert_eq!(cfg.details.len(), 1);
        assert!(cfg.details.contains("kept"));
    }

    #[test]
    fn duplicate_detail_last_write_wins() {
        let (cfg, res) = parse(
            r#"{"log_option":["a","a"],"option_details":[
                {"option_name":"a","log_directory":"first"},
                {"option_name":"a","log_directory":"second"}
            ]}"#,
        );
        res.unwrap();

        assert_eq!(cfg.options.len(), 1);
        assert_eq!(cfg.details.len(), 1);
        assert_eq!(
            cfg.details.get("a").unwrap().log_directory.as_deref(),
            Some("second")
        );
    }

    #[test]
    fn member_lookup_is_case_sensitive() {
        let (cfg, res) = parse(
            r#"{"Log_Option":["a"],"log_option":["b"],"option_details":[
                {"option_name":"b","LOG_DIRECTORY":"upper","log_filename":"f.log"}
            ]}"#,
        );
        res.unwrap();

        let names: Vec<_> = cfg.options.iter().collect();
        assert_eq!(names, vec!["b"]);
        let b = cfg.details.get("b").unwrap();
        assert!(b.log_directory.is_none());
        assert_eq!(b.log_filename.as_deref(), Some("f.log"));
    }

    #[test]
    fn repeated_member_last_occurrence_wins() {
        let (cfg, res) = parse(
            r#"{"log_option":["a"],"log_option":["b"],"option_details":[
                {"option_name":"b","log_directory":"first","log_directory":"second"}
            ]}"#,
        );
        res.unwrap();

        assert!(!cfg.options.contains("a"));
        assert!(cfg.options.contains("b"));
        assert_eq!(
            cfg.details.get("b").unwrap().log_directory.as_deref(),
            Some("second")
        );
    }

    #[test]
    fn parse_accumulates_across_calls() {
        let mut cfg = LogConfig::default();
        parse_into(r#"{"log_option":["a"],"option_details":[]}"#, &mut cfg).unwrap();
        parse_into(r#"{"log_option":["b"],"option_details":[]}"#, &mut cfg).unwrap();

        assert!(cfg.options.contains("a"));
        assert!(cfg.options.contains("b"));
    }

    #[test]
    fn same_text_into_fresh_configs_is_equal() {
        let text = r#"{"log_option":["a","b"],"option_details":[{"option_name":"b","log_rotation_age":"1h"}]}"#;
        let (first, r1) = parse(text);
        let (second, r2) = parse(text);
        r1.unwrap();
        r2.unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn integer_of_truncates_and_saturates() {
        let n = |s: &str| serde_json::from_str::<Number>(s).unwrap();

        assert_eq!(integer_of(&n("10")), 10);
        assert_eq!(integer_of(&n("-3")), -3);
        assert_eq!(integer_of(&n("10.9")), 10);
        assert_eq!(integer_of(&n("-10.9")), -10);
        assert_eq!(integer_of(&n("18446744073709551615")), i64::MAX);
        assert_eq!(integer_of(&n("1e300")), i64::MAX);
        assert_eq!(integer_of(&n("-1e300")), i64::MIN);
    }
}
