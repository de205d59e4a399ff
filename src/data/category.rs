//! CategoryGroup: named statistical groups backing boxplot and histogram charts.

/// Summary statistics for one category's samples, computed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupStats {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub q1: f64,
    pub q3: f64,
}

impl GroupStats {
    fn from_samples(samples: &[f64]) -> Self {
        if samples.is_empty() {
            return Self {
                count: 0,
                min: f64::NAN,
                max: f64::NAN,
                mean: f64::NAN,
                median: f64::NAN,
                q1: f64::NAN,
                q3: f64::NAN,
            };
        }
        let mut sorted: Vec<f64> = samples.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let n = sorted.len();
        let mean = sorted.iter().sum::<f64>() / n as f64;
        // Quartiles by median-of-halves, excluding the median sample for odd n.
        let (lower, upper) = if n % 2 == 0 {
            (&sorted[..n / 2], &sorted[n / 2..])
        } else {
            (&sorted[..n / 2], &sorted[n / 2 + 1..])
        };
        Self {
            count: n,
            min: sorted[0],
            max: sorted[n - 1],
            mean,
            median: median_of(&sorted),
            q1: median_of(lower),
            q3: median_of(upper),
        }
    }
}

fn median_of(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return f64::NAN;
    }
    if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    }
}

/// How a group is drawn and where its annotation marker anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupShape {
    /// Box-and-whisker box; marker anchors at the median.
    Box,
    /// Histogram bar; marker anchors at the bar top (the count).
    Bar,
}

/// A named collection of scalar samples occupying one x-interval
/// (a boxplot box or a histogram bar). Clicks resolve by x-containment,
/// not by nearest point.
#[derive(Debug, Clone)]
pub struct CategoryGroup {
    label: String,
    x_start: f64,
    x_end: f64,
    shape: GroupShape,
    stats: GroupStats,
}

impl CategoryGroup {
    /// A boxplot-style group over `[x_start, x_end)`.
    pub fn new<S: Into<String>>(label: S, x_range: (f64, f64), samples: &[f64]) -> Self {
        Self {
            label: label.into(),
            x_start: x_range.0,
            x_end: x_range.1,
            shape: GroupShape::Box,
            stats: GroupStats::from_samples(samples),
        }
    }

    /// Bin raw samples into `bins` equal-width histogram bars over the sample
    /// range. Samples equal to the maximum land in the last bin. Labels carry
    /// the bin edges.
    pub fn histogram(samples: &[f64], bins: usize) -> Vec<CategoryGroup> {
        if samples.is_empty() || bins == 0 {
            return Vec::new();
        }
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for &v in samples {
            if v < lo {
                lo = v;
            }
            if v > hi {
                hi = v;
            }
        }
        // All-equal samples get a synthetic unit range so every bin keeps a
        // nonzero width and x-containment still resolves the populated bin.
        if hi <= lo {
            lo -= 0.5;
            hi += 0.5;
        }
        let width = (hi - lo) / bins as f64;
        let mut binned: Vec<Vec<f64>> = vec![Vec::new(); bins];
        for &v in samples {
            let i = (((v - lo) / width) as usize).min(bins - 1);
            binned[i].push(v);
        }
        binned
            .into_iter()
            .enumerate()
            .map(|(i, bin)| {
                let start = lo + width * i as f64;
                let end = lo + width * (i + 1) as f64;
                CategoryGroup {
                    label: format!("{:.4}..{:.4}", start, end),
                    x_start: start,
                    x_end: end,
                    shape: GroupShape::Bar,
                    stats: GroupStats::from_samples(&bin),
                }
            })
            .collect()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn x_range(&self) -> (f64, f64) {
        (self.x_start, self.x_end)
    }

    pub fn center(&self) -> f64 {
        (self.x_start + self.x_end) / 2.0
    }

    pub fn shape(&self) -> GroupShape {
        self.shape
    }

    pub fn stats(&self) -> &GroupStats {
        &self.stats
    }

    /// Where the annotation marker anchors in data space.
    pub fn anchor(&self) -> [f64; 2] {
        let y = match self.shape {
            GroupShape::Box => {
                if self.stats.median.is_finite() {
                    self.stats.median
                } else {
                    0.0
                }
            }
            GroupShape::Bar => self.stats.count as f64,
        };
        [self.center(), y]
    }

    /// Range containment for a query x. The end is exclusive unless
    /// `inclusive_end` is set (used for the last group so a click on the
    /// final edge still resolves).
    pub fn contains(&self, x: f64, inclusive_end: bool) -> bool {
        if inclusive_end {
            x >= self.x_start && x <= self.x_end
        } else {
            x >= self.x_start && x < self.x_end
        }
    }
}
