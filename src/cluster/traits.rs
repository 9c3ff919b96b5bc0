use super::item::Label;
use crate::error::Result;

/// Common interface for clustering plain scalar values.
pub trait Clustering {
    /// Fit and return one label per input value, in input order.
    fn fit_predict(&self, values: &[f64]) -> Result<Vec<Label>>;

    /// Fit and predict, returning labels where noise is marked as `None`.
    fn fit_predict_with_noise(&self, values: &[f64]) -> Result<Vec<Option<usize>>> {
        Ok(self
            .fit_predict(values)?
            .into_iter()
            .map(Label::cluster_id)
            .collect())
    }
}
