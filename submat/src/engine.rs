//! Sub-matrix selection entry points
//!
//! Three ways in, sharing resolver, validator and extractors:
//!
//! - [`SubMatrixSelector::select`]: index lists and/or range options.
//!   Unknown representations are passed through with a remark.
//! - [`SubMatrixSelector::select_with_index_matrices`]: same, with index
//!   lists given as small matrices (the `RowIndices`/`ColumnIndices` ports).
//! - [`select_indices`]: explicit indices only. Unknown representations
//!   are an error here.

use std::sync::Arc;

use submat_core::validation::{validate_index_list, validate_range};
use submat_core::{
    ports, Axis, BlockRange, IndexList, Matrix, MatrixElement, MatrixHandle, MatrixShape, Remark,
    Result, SelectError, SelectionConfig, SelectionSpec,
};

use crate::assembler::{Assembler, Selection};
use crate::extract::{column, dense, sparse};

/// Selects sub-matrices according to a [`SelectionConfig`]
#[derive(Debug, Clone, Default)]
pub struct SubMatrixSelector {
    config: SelectionConfig,
}

impl SubMatrixSelector {
    /// Create a selector with the given range options
    pub fn new(config: SelectionConfig) -> Self {
        Self { config }
    }

    /// Get the range options
    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }

    /// Replace the range options
    pub fn set_config(&mut self, config: SelectionConfig) {
        self.config = config;
    }

    /// Select from `input` using index lists, or the range options when no
    /// list is given
    ///
    /// A missing or empty input yields an empty matrix and
    /// [`Remark::EmptyInput`]. No lists and no enabled range returns the
    /// input handle itself.
    pub fn select<T: MatrixElement>(
        &self,
        input: Option<&MatrixHandle<T>>,
        rows: Option<&IndexList>,
        cols: Option<&IndexList>,
    ) -> Result<Selection<T>> {
        let mut out = Assembler::new();
        let Some(input) = usable_input(input) else {
            out.remark(Remark::EmptyInput);
            return Ok(out.finish(Matrix::empty()));
        };

        let resolution = SelectionSpec::resolve(&self.config, input.dimensions(), rows, cols);
        if let Some(remark) = resolution.remark {
            out.remark(remark);
        }
        log::debug!(
            "selecting from {} {}x{} matrix: {:?}",
            input.type_name(),
            input.nrows(),
            input.ncols(),
            resolution.spec
        );

        match resolution.spec {
            SelectionSpec::Passthrough => {
                log::info!("no selection criteria, passing {} through", ports::INPUT_MATRIX);
                Ok(out.passthrough(input))
            }
            SelectionSpec::Explicit { rows, cols } => {
                let matrix = select_indices(Some(input), &rows, &cols)?;
                Ok(out.finish_handle(matrix))
            }
            SelectionSpec::Range(range) => select_range(input, &range, out),
        }
    }

    /// Select using index matrices, flattened row-major into index lists
    ///
    /// A missing or empty input yields an empty matrix before the index
    /// matrices are read.
    pub fn select_with_index_matrices<T: MatrixElement>(
        &self,
        input: Option<&MatrixHandle<T>>,
        rows: Option<&Matrix<T>>,
        cols: Option<&Matrix<T>>,
    ) -> Result<Selection<T>> {
        if usable_input(input).is_none() {
            return self.select(input, None, None);
        }

        let rows = rows
            .map(|m| IndexList::from_index_matrix(Axis::Row, m))
            .transpose()?;
        let cols = cols
            .map(|m| IndexList::from_index_matrix(Axis::Col, m))
            .transpose()?;
        self.select(input, rows.as_ref(), cols.as_ref())
    }

    /// Run against named ports and return the `ResultMatrix` output
    pub fn run<T: MatrixElement>(&self, inputs: &SelectionInputs<T>) -> Result<Selection<T>> {
        self.select_with_index_matrices(
            inputs.input_matrix.as_ref(),
            inputs.row_indices.as_deref(),
            inputs.column_indices.as_deref(),
        )
    }
}

/// Matrices bound to the selector's input ports
#[derive(Debug, Clone)]
pub struct SelectionInputs<T> {
    /// `InputMatrix`
    pub input_matrix: Option<MatrixHandle<T>>,
    /// `RowIndices`
    pub row_indices: Option<MatrixHandle<T>>,
    /// `ColumnIndices`
    pub column_indices: Option<MatrixHandle<T>>,
}

impl<T> Default for SelectionInputs<T> {
    fn default() -> Self {
        Self {
            input_matrix: None,
            row_indices: None,
            column_indices: None,
        }
    }
}

impl<T> SelectionInputs<T> {
    /// Bind a matrix to a port by name; returns `false` for an unknown port
    pub fn bind(&mut self, port: &str, matrix: MatrixHandle<T>) -> bool {
        let slot = match port {
            ports::INPUT_MATRIX => &mut self.input_matrix,
            ports::ROW_INDICES => &mut self.row_indices,
            ports::COLUMN_INDICES => &mut self.column_indices,
            _ => return false,
        };
        *slot = Some(matrix);
        true
    }
}

/// Select by explicit indices only
///
/// At least one list must be non-empty; an empty list selects the whole
/// axis. All indices are validated before anything is copied.
pub fn select_indices<T: MatrixElement>(
    input: Option<&MatrixHandle<T>>,
    rows: &IndexList,
    cols: &IndexList,
) -> Result<MatrixHandle<T>> {
    let input = input.ok_or(SelectError::NoInputMatrix)?;
    if rows.is_empty() && cols.is_empty() {
        return Err(SelectError::EmptySelection);
    }

    let matrix: Matrix<T> = match input.as_ref() {
        Matrix::Sparse(m) => {
            let (row_offsets, col_offsets) = validate_lists(rows, cols, input.dimensions())?;
            sparse::select(m, &row_offsets, &col_offsets).into()
        }
        Matrix::Dense(m) => {
            let (row_offsets, col_offsets) = validate_lists(rows, cols, input.dimensions())?;
            dense::select(m, &row_offsets, &col_offsets).into()
        }
        // structure is checked before bounds
        Matrix::Column(_) => column::select_rows(input, rows, cols)?.into(),
        Matrix::Opaque(storage) => {
            return Err(SelectError::UnknownMatrixType {
                name: storage.type_name(),
            })
        }
    };

    log::debug!(
        "extracted {}x{} {} matrix",
        matrix.nrows(),
        matrix.ncols(),
        matrix.type_name()
    );
    Ok(Arc::new(matrix))
}

/// Select with every option passed as an argument
///
/// Builds a [`SelectionConfig`] and runs [`SubMatrixSelector::select`].
/// Range bounds are inclusive.
#[allow(clippy::too_many_arguments)]
pub fn select_submatrix<T: MatrixElement>(
    input: &MatrixHandle<T>,
    row_indices: Option<&IndexList>,
    col_indices: Option<&IndexList>,
    row_range_enabled: bool,
    col_range_enabled: bool,
    row_start: i64,
    row_end: i64,
    col_start: i64,
    col_end: i64,
) -> Result<MatrixHandle<T>> {
    let config = SelectionConfig {
        row_range_enabled,
        col_range_enabled,
        row_start,
        row_end,
        col_start,
        col_end,
    };
    SubMatrixSelector::new(config)
        .select(Some(input), row_indices, col_indices)
        .map(Selection::into_matrix)
}

fn select_range<T: MatrixElement>(
    input: &MatrixHandle<T>,
    range: &BlockRange,
    mut out: Assembler,
) -> Result<Selection<T>> {
    let block = || validate_range(range, input.dimensions());

    match input.as_ref() {
        Matrix::Sparse(m) => Ok(out.finish(sparse::block(m, &block()?))),
        Matrix::Dense(m) => Ok(out.finish(dense::block(m, &block()?))),
        // column-vector bounds, not the block validator
        Matrix::Column(_) => Ok(out.finish(column::select_range(input, range)?)),
        Matrix::Opaque(_) => {
            block()?;
            out.remark(Remark::NoSelectionCriteria);
            Ok(out.passthrough(input))
        }
    }
}

fn validate_lists(
    rows: &IndexList,
    cols: &IndexList,
    (nrows, ncols): (usize, usize),
) -> Result<(Vec<usize>, Vec<usize>)> {
    let row_offsets = validate_index_list(Axis::Row, rows, nrows)?;
    let col_offsets = validate_index_list(Axis::Col, cols, ncols)?;
    Ok((row_offsets, col_offsets))
}

fn usable_input<T: MatrixElement>(input: Option<&MatrixHandle<T>>) -> Option<&MatrixHandle<T>> {
    input.filter(|m| !m.is_empty())
}
