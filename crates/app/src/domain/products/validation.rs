//! Product and variant validation.
//!
//! Every write path runs its candidate through here exactly once. Rules never
//! short-circuit: all problems are collected so a client can fix them in one
//! round trip.

use std::fmt::{Display, Formatter, Result as FmtResult};

use rustc_hash::FxHashSet;
use serde::Serialize;
use thiserror::Error;
use url::Url;
use uuid::Uuid;

use crate::{
    domain::products::{
        data::{NewColorVariant, NewProduct, NewSize, ProductUpdate},
        records::{ColorVariant, ProductAttributes, ProductChanges, Size},
    },
    uuids::TypedUuid,
};

pub const MODEL_NUMBER: &str = "modelNumber";
pub const SPECIFICATIONS: &str = "specifications";
pub const COMPANY_NAME: &str = "companyName";
pub const PIECE_TYPE: &str = "pieceType";
pub const IMAGE_URL: &str = "imageUrl";
pub const COLORS_AND_SIZES: &str = "colorsAndSizes";

/// A single rule violation, addressed by its JSON field path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// All field errors found in one candidate. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid product data ({})", summarize(.0))]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.0
    }

    /// Whether any error was reported for exactly `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|error| error.field == field)
    }
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validate and normalize a color/size collection.
///
/// Supplied variant ids are kept only when they are UUIDs not already used
/// earlier in the same candidate; anything else is a client-local placeholder
/// or a repeat and gets replaced by a fresh id.
pub fn validate_colors_and_sizes(
    candidate: Vec<NewColorVariant>,
) -> Result<Vec<ColorVariant>, ValidationErrors> {
    let mut validator = Validator::default();
    let colors = validator.colors_and_sizes(candidate);

    validator.finish(colors)
}

/// Validate a full product candidate.
pub fn validate_new_product(candidate: NewProduct) -> Result<ProductAttributes, ValidationErrors> {
    let NewProduct {
        model_number,
        specifications,
        company_name,
        piece_type,
        image_url,
        online_price,
        store_price,
        colors_and_sizes,
    } = candidate;

    let mut validator = Validator::default();

    validator.required(MODEL_NUMBER, &model_number, "model number is required");
    validator.required(SPECIFICATIONS, &specifications, "specifications are required");
    validator.required(COMPANY_NAME, &company_name, "company name is required");
    validator.required(PIECE_TYPE, &piece_type, "piece type is required");
    validator.image_url(image_url.as_deref());

    let colors_and_sizes = validator.colors_and_sizes(colors_and_sizes);

    validator.finish(ProductAttributes {
        model_number,
        specifications,
        company_name,
        piece_type,
        image_url,
        online_price,
        store_price,
        colors_and_sizes,
    })
}

/// Validate the fields present in a partial update.
pub fn validate_product_update(update: ProductUpdate) -> Result<ProductChanges, ValidationErrors> {
    let ProductUpdate {
        model_number,
        specifications,
        company_name,
        piece_type,
        image_url,
        online_price,
        store_price,
        colors_and_sizes,
    } = update;

    let mut validator = Validator::default();

    if let Some(value) = &model_number {
        validator.required(MODEL_NUMBER, value, "model number is required");
    }
    if let Some(value) = &specifications {
        validator.required(SPECIFICATIONS, value, "specifications are required");
    }
    if let Some(value) = &company_name {
        validator.required(COMPANY_NAME, value, "company name is required");
    }
    if let Some(value) = &piece_type {
        validator.required(PIECE_TYPE, value, "piece type is required");
    }
    validator.image_url(image_url.as_deref());

    let colors_and_sizes = colors_and_sizes.map(|colors| validator.colors_and_sizes(colors));

    validator.finish(ProductChanges {
        model_number,
        specifications,
        company_name,
        piece_type,
        image_url,
        online_price,
        store_price,
        colors_and_sizes,
    })
}

#[derive(Debug, Default)]
struct Validator {
    errors: Vec<FieldError>,
    issued_ids: FxHashSet<Uuid>,
}

impl Validator {
    fn push(&mut self, field: impl Into<String>, message: &str) {
        self.errors.push(FieldError::new(field, message));
    }

    fn required(&mut self, field: impl Into<String>, value: &str, message: &str) {
        if is_blank(value) {
            self.push(field, message);
        }
    }

    fn image_url(&mut self, value: Option<&str>) {
        let Some(value) = value.filter(|value| !value.is_empty()) else {
            return;
        };

        if Url::parse(value).is_err() {
            self.push(IMAGE_URL, "image URL is not a valid URL");
        }
    }

    fn colors_and_sizes(&mut self, colors: Vec<NewColorVariant>) -> Vec<ColorVariant> {
        if colors.is_empty() {
            self.push(COLORS_AND_SIZES, "at least one color is required");
        }

        colors
            .into_iter()
            .enumerate()
            .map(|(index, color)| self.color(&format!("{COLORS_AND_SIZES}[{index}]"), color))
            .collect()
    }

    fn color(&mut self, path: &str, color: NewColorVariant) -> ColorVariant {
        let NewColorVariant { id, name, sizes } = color;
        let id = self.variant_id(id.as_deref());

        self.required(format!("{path}.name"), &name, "color name is required");

        if sizes.is_empty() {
            self.push(format!("{path}.sizes"), "at least one size is required");
        }

        let sizes = sizes
            .into_iter()
            .enumerate()
            .map(|(index, size)| self.size(&format!("{path}.sizes[{index}]"), size))
            .collect();

        ColorVariant { id, name, sizes }
    }

    fn size(&mut self, path: &str, size: NewSize) -> Size {
        let NewSize { id, value } = size;

        self.required(format!("{path}.value"), &value, "size value is required");

        Size {
            id: self.variant_id(id.as_deref()),
            value,
        }
    }

    /// Colors and sizes share one id space within a candidate.
    fn variant_id<T>(&mut self, id: Option<&str>) -> TypedUuid<T> {
        let id = id
            .and_then(|id| id.parse::<TypedUuid<T>>().ok())
            .filter(|id| !self.issued_ids.contains(&id.into_uuid()))
            .unwrap_or_default();

        self.issued_ids.insert(id.into_uuid());

        id
    }

    fn finish<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.errors.is_empty() {
            Ok(value)
        } else {
            Err(ValidationErrors(self.errors))
        }
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
