//
//  azure-devops-rest
//  output/json.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! JSON output
//!
//! | Function | Output |
//! |----------|--------|
//! | [`write_json`] | Pretty-printed value on stdout |
//! | [`write_json_to`] | Pretty-printed value on any writer |
//! | [`write_json_lines`] | One compact value per line, used by `ado api --paginate` |

use serde::Serialize;
use std::io::{self, Write};

pub fn write_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let stdout = io::stdout();
    write_json_to(&mut stdout.lock(), value)
}

pub fn write_json_to<W: Write, T: Serialize + ?Sized>(
    writer: &mut W,
    value: &T,
) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}

pub fn write_json_lines<W: Write, T: Serialize>(writer: &mut W, values: &[T]) -> anyhow::Result<()> {
    for value in values {
        serde_json::to_writer(&mut *writer, value)?;
        writeln!(writer)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_write_json_to_is_pretty() {
        let mut out = Vec::new();
        write_json_to(&mut out, &json!({"name": "Fabrikam"})).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{\n  \"name\": \"Fabrikam\"\n}\n");
    }

    #[test]
    fn test_write_json_lines() {
        let mut out = Vec::new();
        write_json_lines(&mut out, &[json!({"id": 1}), json!({"id": 2})]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{\"id\":1}\n{\"id\":2}\n");
    }
}
