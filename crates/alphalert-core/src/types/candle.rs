//! OHLC candle data.

use crate::de;
use serde::de::{Deserializer, Error as DeError, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A single OHLC bar.
///
/// The upstream candle endpoint serializes bars as positional 5-tuples of
/// string-or-number values: `[timestamp, open, high, low, close]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Candle {
    /// Bar open time, epoch milliseconds.
    pub timestamp: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl<'de> Deserialize<'de> for Candle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CandleVisitor;

        impl<'de> Visitor<'de> for CandleVisitor {
            type Value = Candle;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a [timestamp, open, high, low, close] tuple")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Candle, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut fields = [0.0f64; 4];
                let timestamp_value: Value = seq
                    .next_element()?
                    .ok_or_else(|| A::Error::invalid_length(0, &self))?;
                let timestamp = de::i64_from_value(&timestamp_value);

                for (i, slot) in fields.iter_mut().enumerate() {
                    let value: Value = seq
                        .next_element()?
                        .ok_or_else(|| A::Error::invalid_length(i + 1, &self))?;
                    *slot = de::f64_from_value(&value);
                }

                // Drain any trailing elements (volume etc.) the endpoint appends.
                while seq.next_element::<Value>()?.is_some() {}

                let [open, high, low, close] = fields;
                Ok(Candle {
                    timestamp,
                    open,
                    high,
                    low,
                    close,
                })
            }
        }

        deserializer.deserialize_seq(CandleVisitor)
    }
}
