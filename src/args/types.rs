use std::collections::BTreeMap;

/// Header name to header value, as parsed from the `-H` spec string.
pub type HeaderMapping = BTreeMap<String, String>;
