//! Lenient scalar decoding for request payloads.
//!
//! Clients may send numbers as strings (`"14.99"`) and strings as numbers (`42`); both are cast
//! to the field type before storage. A value that cannot be cast (an object, an array, `"abc"`
//! for a number) fails deserialization, which the JSON extractor reports as a server-side
//! fault. An empty or blank string decodes as absent.

use serde::{Deserialize, Deserializer, de::Error};

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

fn blank(text: &str) -> bool {
    text.trim().is_empty()
}

fn parse_float<E: Error>(text: &str) -> Result<f64, E> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| E::custom(format!("cannot cast \"{text}\" to a number")))
}

fn float_to_int<E: Error>(n: f64) -> Result<i64, E> {
    if n.fract() == 0.0 && n >= i64::MIN as f64 && n <= i64::MAX as f64 {
        Ok(n as i64)
    } else {
        Err(E::custom(format!("cannot cast {n} to an integer")))
    }
}

pub fn option_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Scalar>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Scalar::Bool(b)) => Ok(Some(if b { 1.0 } else { 0.0 })),
        Some(Scalar::Int(n)) => Ok(Some(n as f64)),
        Some(Scalar::Float(n)) => Ok(Some(n)),
        Some(Scalar::Text(text)) if blank(&text) => Ok(None),
        Some(Scalar::Text(text)) => parse_float(&text).map(Some),
    }
}

pub fn option_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Scalar>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Scalar::Bool(b)) => Ok(Some(i64::from(b))),
        Some(Scalar::Int(n)) => Ok(Some(n)),
        Some(Scalar::Float(n)) => float_to_int(n).map(Some),
        Some(Scalar::Text(text)) if blank(&text) => Ok(None),
        Some(Scalar::Text(text)) => match text.trim().parse::<i64>() {
            Ok(n) => Ok(Some(n)),
            Err(_) => float_to_int(parse_float(&text)?).map(Some),
        },
    }
}

pub fn option_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(|value| match value {
        Scalar::Bool(b) => b.to_string(),
        Scalar::Int(n) => n.to_string(),
        Scalar::Float(n) => n.to_string(),
        Scalar::Text(text) => text,
    }))
}
