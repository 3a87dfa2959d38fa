//! JSON matrix documents
//!
//! A document names its representation at the top level:
//!
//! ```json
//! {"dense": {"rows": 2, "cols": 2, "data": [1.0, 2.0, 3.0, 4.0]}}
//! {"sparse": {"rows": 3, "cols": 3, "entries": [[0, 0, 5.0], [2, 2, 7.0]]}}
//! {"column": {"values": [10.0, 20.0, 30.0]}}
//! ```

use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};
use submat_core::{
    ColumnMatrix, DenseMatrix, Matrix, MatrixElement, MatrixHandle, MatrixShape, SparseRowMatrix,
};

use crate::Result;

/// Serialized form of a [`Matrix`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatrixDocument<T> {
    Dense {
        rows: usize,
        cols: usize,
        /// Row-major values
        data: Vec<T>,
    },
    Sparse {
        rows: usize,
        cols: usize,
        entries: Vec<(usize, usize, T)>,
    },
    Column {
        values: Vec<T>,
    },
}

impl<T: MatrixElement> MatrixDocument<T> {
    /// Build the matrix this document describes, checking its shape
    pub fn into_matrix(self) -> Result<Matrix<T>> {
        Ok(match self {
            MatrixDocument::Dense { rows, cols, data } => {
                DenseMatrix::from_rows(rows, cols, data)?.into()
            }
            MatrixDocument::Sparse {
                rows,
                cols,
                entries,
            } => SparseRowMatrix::from_triplets(rows, cols, entries)?.into(),
            MatrixDocument::Column { values } => ColumnMatrix::from_values(values).into(),
        })
    }

    /// Describe a matrix; `None` for opaque storage
    pub fn from_matrix(matrix: &Matrix<T>) -> Option<Self> {
        match matrix {
            Matrix::Dense(m) => Some(MatrixDocument::Dense {
                rows: m.nrows(),
                cols: m.ncols(),
                data: m.as_slice().to_vec(),
            }),
            Matrix::Sparse(m) => Some(MatrixDocument::Sparse {
                rows: m.nrows(),
                cols: m.ncols(),
                entries: m.entries().collect(),
            }),
            Matrix::Column(m) => Some(MatrixDocument::Column {
                values: m.as_slice().to_vec(),
            }),
            Matrix::Opaque(_) => None,
        }
    }
}

/// Read a matrix document from a JSON file
pub fn read_matrix<T, P>(path: P) -> Result<MatrixHandle<T>>
where
    T: MatrixElement + for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let reader = BufReader::new(File::open(path.as_ref())?);
    let doc: MatrixDocument<T> = serde_json::from_reader(reader)?;
    let matrix = doc.into_matrix()?;
    log::debug!(
        "read {}x{} {} matrix from {}",
        matrix.nrows(),
        matrix.ncols(),
        matrix.type_name(),
        path.as_ref().display()
    );
    Ok(matrix.into_handle())
}

/// Write a matrix as a JSON document
///
/// Opaque matrices have no document form; they are written as `null`.
pub fn write_matrix<T, W>(matrix: &Matrix<T>, writer: W) -> Result<()>
where
    T: MatrixElement + Serialize,
    W: Write,
{
    let mut writer = BufWriter::new(writer);
    serde_json::to_writer_pretty(&mut writer, &MatrixDocument::from_matrix(matrix))?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
