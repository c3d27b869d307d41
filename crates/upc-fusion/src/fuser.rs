use crate::Point;
use crate::error::FusionError;

/// A processor that claims points for one class label.
pub trait Fuser {
    /// Class label assigned to the points this processor selects.
    fn label(&self) -> u16;

    /// Mask of the points to label, with one entry per point.
    ///
    /// Only points with `mask[i] == true` may be selected. `labels` carries
    /// the current labelling, either one per point or empty when nothing is
    /// labelled yet; processors are free to ignore its contents.
    ///
    /// # Errors
    /// Returns `FusionError` when inputs disagree in length or the
    /// processor's data source fails.
    fn label_mask(
        &self,
        points: &[Point],
        labels: &[u16],
        mask: &[bool],
        tilecode: &str,
    ) -> Result<Vec<bool>, FusionError>;
}
