use serde::{Deserialize, Serialize};
use std::fmt;

/// Shape of a single condition attribute.
///
/// Values reaching the induction engine are always normalized into `[0, 1]`;
/// the metadata here only carries what is needed to interpret them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AttributeKind {
    /// Continuous attribute with its original (denormalized) range.
    Numeric { min: f64, max: f64 },
    /// Discrete attribute; the cardinality is `values.len()`.
    Nominal { values: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeDef {
    pub name: String,
    #[serde(flatten)]
    pub kind: AttributeKind,
}

impl AttributeDef {
    pub fn numeric(name: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            name: name.into(),
            kind: AttributeKind::Numeric { min, max },
        }
    }

    pub fn nominal<S: Into<String>>(name: impl Into<String>, values: Vec<S>) -> Self {
        Self {
            name: name.into(),
            kind: AttributeKind::Nominal {
                values: values.into_iter().map(Into::into).collect(),
            },
        }
    }

    pub fn is_nominal(&self) -> bool {
        matches!(self.kind, AttributeKind::Nominal { .. })
    }

    /// Number of distinct values of a nominal attribute, `None` for numeric ones.
    pub fn cardinality(&self) -> Option<usize> {
        match &self.kind {
            AttributeKind::Nominal { values } => Some(values.len()),
            AttributeKind::Numeric { .. } => None,
        }
    }

    /// Map a normalized numeric value back into the attribute's original range.
    pub fn denormalize(&self, value: f64) -> f64 {
        match self.kind {
            AttributeKind::Numeric { min, max } => min + value * (max - min),
            AttributeKind::Nominal { .. } => value,
        }
    }
}

/// Slot index of a normalized nominal value.
///
/// Nominal values are normalized as `index / (cardinality - 1)`, so the slot
/// is recovered by rounding. Out-of-range inputs clamp to the nearest slot.
pub fn nominal_slot(value: f64, cardinality: usize) -> usize {
    if cardinality <= 1 {
        return 0;
    }
    let last = cardinality - 1;
    let scaled = (value * last as f64).round();
    if scaled.is_nan() || scaled <= 0.0 {
        0
    } else if scaled >= last as f64 {
        last
    } else {
        scaled as usize
    }
}

/// A training or test example: one normalized value per attribute plus its class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    pub values: Vec<f64>,
    pub output: usize,
}

impl Instance {
    pub fn new(values: Vec<f64>, output: usize) -> Self {
        Self { values, output }
    }
}

/// A labeled dataset with its attribute metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub name: Option<String>,
    pub attributes: Vec<AttributeDef>,
    /// Class labels, indexed by `Instance::output`.
    pub classes: Vec<String>,
    pub instances: Vec<Instance>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Human-readable class label, falling back to the raw index.
    pub fn class_name(&self, output: usize) -> String {
        class_label(&self.classes, output)
    }
}

pub(crate) fn class_label(classes: &[String], output: usize) -> String {
    classes
        .get(output)
        .cloned()
        .unwrap_or_else(|| output.to_string())
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeKind::Numeric { min, max } => write!(f, "numeric [{min}, {max}]"),
            AttributeKind::Nominal { values } => write!(f, "nominal {{{}}}", values.join(", ")),
        }
    }
}
