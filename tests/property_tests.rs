//! Property-based tests for native_log_handler using proptest

use native_log_handler::prelude::*;
use native_log_handler::prettify;
use native_log_handler::sinks::ChannelLog;
use proptest::prelude::*;
use std::sync::Arc;

const HERE: SourceLocation<'static> = SourceLocation::new("property_tests.rs", "prop", 0);

fn any_level() -> impl Strategy<Value = Level> {
    prop_oneof![
        Just(Level::Trace),
        Just(Level::Debug),
        Just(Level::Info),
        Just(Level::Notice),
        Just(Level::Warning),
        Just(Level::Error),
        Just(Level::Critical),
    ]
}

fn any_metadata() -> impl Strategy<Value = Metadata> {
    prop::collection::btree_map("[a-z_]{1,8}", "[a-zA-Z0-9]{0,8}", 0..6).prop_map(|entries| {
        entries
            .into_iter()
            .map(|(k, v)| (k, MetadataValue::from(v)))
            .collect()
    })
}

#[derive(Debug, Clone)]
enum MetadataOp {
    Set(String, String),
    Remove(String),
    Replace(Metadata),
}

fn any_op() -> impl Strategy<Value = MetadataOp> {
    prop_oneof![
        ("[a-d]", "[a-z0-9]{0,4}").prop_map(|(k, v)| MetadataOp::Set(k, v)),
        "[a-d]".prop_map(MetadataOp::Remove),
        any_metadata().prop_map(MetadataOp::Replace),
    ]
}

fn handler() -> NativeLogHandler {
    let (sink, _rx) = ChannelLog::unbounded("prop", "test");
    NativeLogHandler::with_native("prop", Arc::new(sink))
}

// ============================================================================
// Metadata Cache Tests
// ============================================================================

proptest! {
    /// The cached rendering always matches the current metadata
    #[test]
    fn test_cache_tracks_metadata(ops in prop::collection::vec(any_op(), 0..24)) {
        let mut handler = handler();

        for op in ops {
            match op {
                MetadataOp::Set(k, v) => handler.set_metadata(&k, Some(v.into())),
                MetadataOp::Remove(k) => handler.set_metadata(&k, None),
                MetadataOp::Replace(m) => handler.replace_metadata(m),
            }
            let expected = prettify(&handler.metadata());
            prop_assert_eq!(handler.pretty_metadata(), expected.as_deref());
        }
    }

    /// Empty metadata never produces a suffix
    #[test]
    fn test_prettify_none_iff_empty(metadata in any_metadata()) {
        prop_assert_eq!(prettify(&metadata).is_none(), metadata.is_empty());
    }

    /// One `key=value` token per entry
    #[test]
    fn test_prettify_token_count(metadata in any_metadata()) {
        if let Some(rendered) = prettify(&metadata) {
            let tokens: Vec<&str> = rendered.split(' ').collect();
            prop_assert_eq!(tokens.len(), metadata.len());
            for (token, (key, value)) in tokens.iter().zip(metadata.iter()) {
                prop_assert_eq!(*token, format!("{}={}", key, value));
            }
        }
    }
}

// ============================================================================
// Merge Tests
// ============================================================================

proptest! {
    /// Call-site entries win, and the handler keeps its own metadata
    #[test]
    fn test_merge_override(base in any_metadata(), call_site in any_metadata()) {
        let mut handler = handler();
        handler.replace_metadata(base.clone());

        let mut expected = base.clone();
        for (k, v) in &call_site {
            expected.insert(k.clone(), v.clone());
        }

        let rendered = handler.render(&"msg", Some(&call_site));
        let expected_text = match prettify(&expected) {
            Some(pretty) => format!("msg -- {}", pretty),
            None => "msg".to_string(),
        };
        prop_assert_eq!(rendered, expected_text);
        prop_assert_eq!(handler.metadata(), base);
    }
}

// ============================================================================
// Level Tests
// ============================================================================

proptest! {
    /// Every level reaches the native logger exactly once at the same severity
    #[test]
    fn test_level_dispatch_total(level in any_level(), message in "[ -~]{0,32}") {
        let (sink, rx) = ChannelLog::unbounded("prop", "levels");
        let handler = NativeLogHandler::with_native("prop", Arc::new(sink));

        handler.log(level, &message, None, &HERE);

        let records: Vec<_> = rx.try_iter().collect();
        prop_assert_eq!(records.len(), 1);
        prop_assert_eq!(records[0].level, level);
        prop_assert_eq!(&records[0].message, &message);
    }

    /// Level names parse back to the same level in any case
    #[test]
    fn test_level_str_roundtrip(level in any_level(), lower in any::<bool>()) {
        let name = if lower { level.to_str().to_lowercase() } else { level.to_str().to_string() };
        let parsed: Level = name.parse().unwrap();
        prop_assert_eq!(parsed, level);
    }

    /// Ordering follows declaration order
    #[test]
    fn test_level_ordering(a in any_level(), b in any_level()) {
        prop_assert_eq!(a < b, (a as u8) < (b as u8));
        prop_assert_eq!(a == b, (a as u8) == (b as u8));
    }
}
