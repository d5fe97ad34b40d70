use std::{fmt::Display, io::Write};

use ndarray::{Array, Array2, Axis, Dimension};
use phonecodec::IndexTensor;
use serde_json::{Value, json};

/// Tensor serialization formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, clap::ValueEnum)]
pub enum TensorFormat {
    /// One innermost lane per line, space separated.
    #[default]
    Text,

    /// `{"shape": [...], "data": [...]}` with row-major data.
    Json,
}

/// Write a tensor in the given format.
pub fn write_tensor<A, D>(
    writer: &mut dyn Write,
    tensor: &Array<A, D>,
    format: TensorFormat,
) -> Result<(), Box<dyn std::error::Error>>
where
    A: Copy + Display + Into<Value>,
    D: Dimension,
{
    match format {
        TensorFormat::Text => {
            if tensor.ndim() == 0 {
                return Ok(());
            }
            for lane in tensor.lanes(Axis(tensor.ndim() - 1)) {
                for (idx, value) in lane.iter().enumerate() {
                    write!(writer, "{}{}", if idx == 0 { "" } else { " " }, value)?;
                }
                writeln!(writer)?;
            }
        }
        TensorFormat::Json => {
            let data: Vec<Value> = tensor.iter().map(|&v| v.into()).collect();
            let doc = json!({
                "shape": tensor.shape(),
                "data": data,
            });
            serde_json::to_writer(&mut *writer, &doc)?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Parse a text index tensor: one position per line, one batch column per field.
///
/// Blank lines are skipped.
pub fn parse_index_tensor(lines: &[String]) -> Result<IndexTensor<u32>, Box<dyn std::error::Error>> {
    let mut width: Option<usize> = None;
    let mut data: Vec<u32> = Vec::new();
    let mut rows = 0;

    for (lineno, line) in lines.iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let row = line
            .split_whitespace()
            .map(|s| s.parse::<u32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| format!("line {}: {e}", lineno + 1))?;

        match width {
            None => width = Some(row.len()),
            Some(w) if w != row.len() => {
                return Err(format!(
                    "line {}: expected {w} columns, found {}",
                    lineno + 1,
                    row.len()
                )
                .into());
            }
            _ => {}
        }

        data.extend(row);
        rows += 1;
    }

    Ok(Array2::from_shape_vec((rows, width.unwrap_or(0)), data)?)
}

#[cfg(test)]
mod tests {
    use ndarray::{Array3, array};

    use super::*;

    fn render<A, D>(
        tensor: &Array<A, D>,
        format: TensorFormat,
    ) -> String
    where
        A: Copy + Display + Into<Value>,
        D: Dimension,
    {
        let mut buf: Vec<u8> = Vec::new();
        write_tensor(&mut buf, tensor, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_write_text() {
        let tensor: IndexTensor<u32> = array![[0, 9], [1, 10]];
        assert_eq!(render(&tensor, TensorFormat::Text), "0 9\n1 10\n");

        let tensor: Array3<f32> = Array3::from_elem((1, 2, 2), 0.5);
        assert_eq!(render(&tensor, TensorFormat::Text), "0.5 0.5\n0.5 0.5\n");
    }

    #[test]
    fn test_write_json() {
        let tensor: IndexTensor<u32> = array![[0, 9], [1, 10]];
        assert_eq!(
            render(&tensor, TensorFormat::Json),
            "{\"data\":[0,9,1,10],\"shape\":[2,2]}\n"
        );
    }

    #[test]
    fn test_parse_roundtrip() {
        let tensor: IndexTensor<u32> = array![[0, 9], [1, 10], [2, 11]];
        let text = render(&tensor, TensorFormat::Text);
        let lines: Vec<String> = text.lines().map(str::to_string).collect();
        assert_eq!(parse_index_tensor(&lines).unwrap(), tensor);
    }

    #[test]
    fn test_parse_errors() {
        let lines = vec!["0 1".to_string(), "2".to_string()];
        assert!(parse_index_tensor(&lines).is_err());

        let lines = vec!["0 x".to_string()];
        assert!(parse_index_tensor(&lines).is_err());

        let lines = vec!["".to_string()];
        assert_eq!(parse_index_tensor(&lines).unwrap().dim(), (0, 0));
    }
}
