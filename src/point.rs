/// A position on the globe in signed decimal degrees.
///
/// Negative latitudes are south of the equator, negative longitudes are
/// west of Greenwich.
pub trait Point: Sync {
    fn latitude(&self) -> f64;
    fn longitude(&self) -> f64;
}
