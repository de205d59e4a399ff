//! Series: one plotted line's ordered points plus optional annotations.

use crate::error::AnnotateError;

/// An ordered sequence of `(x, y)` points belonging to one plotted line,
/// optionally paired with one annotation string per point.
#[derive(Debug, Clone)]
pub struct Series {
    name: String,
    points: Vec<[f64; 2]>,
    annotations: Option<Vec<String>>,
}

impl Series {
    /// A series from explicit `(x, y)` points, without annotations.
    pub fn new<S: Into<String>>(name: S, points: Vec<[f64; 2]>) -> Self {
        Self {
            name: name.into(),
            points,
            annotations: None,
        }
    }

    /// A series from y-values only; x becomes the point index `0..n`.
    pub fn from_ys<S: Into<String>>(name: S, ys: &[f64]) -> Self {
        let points = ys
            .iter()
            .enumerate()
            .map(|(i, &y)| [i as f64, y])
            .collect();
        Self::new(name, points)
    }

    /// A series with one annotation string per point.
    ///
    /// Fails with [`AnnotateError::InvalidAnnotationShape`] when the lengths
    /// differ; the mismatch is rejected here, at registration time, not on
    /// first interaction.
    pub fn with_annotations<S: Into<String>>(
        name: S,
        points: Vec<[f64; 2]>,
        annotations: Vec<String>,
    ) -> Result<Self, AnnotateError> {
        let name = name.into();
        if annotations.len() != points.len() {
            return Err(AnnotateError::InvalidAnnotationShape {
                series: name,
                points: points.len(),
                annotations: annotations.len(),
            });
        }
        Ok(Self {
            name,
            points,
            annotations: Some(annotations),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn points(&self) -> &[[f64; 2]] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Annotation for a point index, when an annotation list is attached.
    pub fn annotation(&self, index: usize) -> Option<&str> {
        self.annotations
            .as_ref()
            .and_then(|a| a.get(index))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_ys_uses_index_as_x() {
        let s = Series::from_ys("s", &[5.0, 7.0, 9.0]);
        assert_eq!(s.points(), &[[0.0, 5.0], [1.0, 7.0], [2.0, 9.0]]);
    }

    #[test]
    fn annotation_shape_mismatch_is_rejected() {
        let err = Series::with_annotations(
            "s",
            vec![[0.0, 0.0], [1.0, 1.0]],
            vec!["only one".to_string()],
        )
        .unwrap_err();
        assert_eq!(
            err,
            AnnotateError::InvalidAnnotationShape {
                series: "s".to_string(),
                points: 2,
                annotations: 1,
            }
        );
    }

    #[test]
    fn annotation_lookup() {
        let s = Series::with_annotations(
            "s",
            vec![[0.0, 0.0], [1.0, 1.0]],
            vec!["a".to_string(), "b".to_string()],
        )
        .unwrap();
        assert_eq!(s.annotation(1), Some("b"));
        assert_eq!(s.annotation(2), None);

        let bare = Series::new("t", vec![[0.0, 0.0]]);
        assert_eq!(bare.annotation(0), None);
    }
}
