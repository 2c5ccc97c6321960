// SPDX-License-Identifier: Mulan PSL v2
/*
 * Copyright (c) 2026 crlf-io Contributors
 * crlf-io is licensed under Mulan PSL v2.
 * You can use this software according to the terms and conditions of the Mulan PSL v2.
 * You may obtain a copy of Mulan PSL v2 at:
 *         http://license.coscl.org.cn/MulanPSL2
 *
 * THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND,
 * EITHER EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT,
 * MERCHANTABILITY OR FIT FOR A PARTICULAR PURPOSE.
 * See the Mulan PSL v2 for more details.
 */

use anyhow::{Context, Result};
use log::debug;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

pub fn parse<T, S>(json: S) -> Result<T>
where
    T: DeserializeOwned,
    S: AsRef<str>,
{
    serde_json::from_str(json.as_ref())
        .map_err(|e| {
            debug!("Parsing json failed, {}", e);
            e
        })
        .context("Failed to parse json")
}

pub fn stringify<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value)
        .map_err(|e| {
            debug!("Stringifying value failed, {}", e);
            e
        })
        .context("Failed to stringify value")
}

/// Binds a column-name keyed record onto a typed value.
///
/// Columns absent from the record fall back to serde defaults and columns
/// the type does not know are skipped, so partial result sets bind cleanly.
pub fn from_record<T: DeserializeOwned>(record: Map<String, Value>) -> Result<T> {
    serde_json::from_value(Value::Object(record))
        .map_err(|e| {
            debug!("Binding record failed, {}", e);
            e
        })
        .context("Failed to bind record")
}

/* MapContext */

/// Cascading `{key: value}` builder for ad-hoc JSON objects.
///
/// ```
/// let json = crlf_io::util::json::map()
///     .put("hoge", 1)
///     .put("moge", 2)
///     .stringify()
///     .unwrap();
/// assert_eq!(json, r#"{"hoge":1,"moge":2}"#);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapContext(Map<String, Value>);

impl MapContext {
    pub fn new() -> Self {
        Self(Map::new())
    }

    pub fn put<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn stringify(&self) -> Result<String> {
        self::stringify(&self.0)
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

pub fn map() -> MapContext {
    MapContext::new()
}
