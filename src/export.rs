use std::{io, path::Path};

use csv::{Writer, WriterBuilder};
use serde::Serialize;

use crate::{error::Result, view::BookRow};

#[derive(Serialize)]
struct Record<'a> {
    id: i64,
    name: &'a str,
    price: &'a str,
}

impl<'a> From<&'a BookRow> for Record<'a> {
    fn from(row: &'a BookRow) -> Self {
        Record {
            id: row.id(),
            name: &row.name_input,
            price: &row.price_input,
        }
    }
}

pub fn export_file(filename: impl AsRef<Path>, rows: &[BookRow]) -> Result<usize> {
    let wtr = WriterBuilder::new().has_headers(false).from_path(filename)?;
    write_rows(wtr, rows)
}

const HEADER: [&str; 3] = ["id", "name", "price"];

/// `wtr` must be built without automatic headers; the header row is always
/// written here so an empty list still produces one.
pub fn write_rows<W: io::Write>(mut wtr: Writer<W>, rows: &[BookRow]) -> Result<usize> {
    wtr.write_record(HEADER)?;
    for row in rows {
        wtr.serialize(Record::from(row))?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::Book;
    use crate::view::ListView;

    fn writer(buf: &mut Vec<u8>) -> Writer<&mut Vec<u8>> {
        WriterBuilder::new().has_headers(false).from_writer(buf)
    }

    #[test]
    fn writes_header_and_rows() {
        let mut view = ListView::new();
        view.push(&Book {
            id: 1,
            name: "Dune".to_string(),
            price: 1200,
        });
        view.push(&Book {
            id: 2,
            name: "War, and Peace".to_string(),
            price: 3000,
        });

        let mut buf = Vec::new();
        let written = write_rows(writer(&mut buf), view.rows()).unwrap();
        assert_eq!(written, 2);
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "id,name,price\n1,Dune,1200\n2,\"War, and Peace\",3000\n"
        );
    }

    #[test]
    fn empty_view_still_writes_header() {
        let mut buf = Vec::new();
        assert_eq!(write_rows(writer(&mut buf), &[]).unwrap(), 0);
        assert_eq!(String::from_utf8(buf).unwrap(), "id,name,price\n");
    }

    #[test]
    fn empty_file_has_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        assert_eq!(export_file(&path, &[]).unwrap(), 0);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "id,name,price\n");
    }
}
