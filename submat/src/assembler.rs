//! Output assembly: wrap results in handles and report remarks

use std::sync::Arc;

use submat_core::{Matrix, MatrixHandle, Remark};

/// Result of a selection together with the remarks raised on the way
#[derive(Debug, Clone)]
pub struct Selection<T> {
    matrix: MatrixHandle<T>,
    remarks: Vec<Remark>,
}

impl<T> Selection<T> {
    /// The selected matrix, published on the `ResultMatrix` port
    pub fn matrix(&self) -> &MatrixHandle<T> {
        &self.matrix
    }

    /// Consume the selection and return the matrix handle
    pub fn into_matrix(self) -> MatrixHandle<T> {
        self.matrix
    }

    /// Non-fatal diagnostics, in the order they were raised
    pub fn remarks(&self) -> &[Remark] {
        &self.remarks
    }

    /// Whether a given remark was raised
    pub fn has_remark(&self, remark: Remark) -> bool {
        self.remarks.contains(&remark)
    }
}

/// Collects remarks during one selection and produces the [`Selection`]
#[derive(Debug, Default)]
pub(crate) struct Assembler {
    remarks: Vec<Remark>,
}

impl Assembler {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Record and log a remark
    pub(crate) fn remark(&mut self, remark: Remark) {
        match remark {
            Remark::EmptyInput => log::info!("{remark}"),
            Remark::RangeSettingsIgnored | Remark::NoSelectionCriteria => log::warn!("{remark}"),
        }
        self.remarks.push(remark);
    }

    /// Wrap a freshly extracted matrix
    pub(crate) fn finish<T>(self, matrix: impl Into<Matrix<T>>) -> Selection<T> {
        self.finish_handle(Arc::new(matrix.into()))
    }

    /// Publish an existing handle
    pub(crate) fn finish_handle<T>(self, matrix: MatrixHandle<T>) -> Selection<T> {
        Selection {
            matrix,
            remarks: self.remarks,
        }
    }

    /// Publish the input handle itself
    pub(crate) fn passthrough<T>(self, input: &MatrixHandle<T>) -> Selection<T> {
        self.finish_handle(Arc::clone(input))
    }
}
