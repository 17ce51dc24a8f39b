// src/csv.rs
use std::io::{self, Write};

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W, S>(mut w: W, row: &[S], sep: char) -> io::Result<()>
where
    W: Write,
    S: AsRef<str>,
{
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Header row followed by every data row.
pub fn write_table<W, H, S>(mut w: W, headers: &[H], rows: &[Vec<S>], sep: char) -> io::Result<()>
where
    W: Write,
    H: AsRef<str>,
    S: AsRef<str>,
{
    write_row(&mut w, headers, sep)?;
    for r in rows {
        write_row(&mut w, r, sep)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_string(row: &[&str], sep: char) -> String {
        let mut buf = Vec::new();
        write_row(&mut buf, row, sep).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn plain_fields_are_bare() {
        assert_eq!(row_string(&["a", "b c", "1.5"], ','), "a,b c,1.5\n");
    }

    #[test]
    fn quotes_when_needed() {
        assert_eq!(row_string(&["x,y", "say \"hi\"", "l1\nl2"], ','),
            "\"x,y\",\"say \"\"hi\"\"\",\"l1\nl2\"\n");
    }

    #[test]
    fn tab_separator_leaves_commas_alone() {
        assert_eq!(row_string(&["x,y", "a\tb"], '\t'), "x,y\t\"a\tb\"\n");
    }

    #[test]
    fn table_writes_header_even_without_rows() {
        let mut buf = Vec::new();
        let rows: Vec<Vec<String>> = Vec::new();
        write_table(&mut buf, &["A", "B"], &rows, ',').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "A,B\n");
    }
}
