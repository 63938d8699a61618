//! Product request and response bodies.
//!
//! Field names are camelCase on the wire.

use jiff::Timestamp;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use inventory_app::domain::products::{
    data::{NewColorVariant, NewProduct, NewSize, ProductUpdate},
    records::{ColorVariant, ProductRecord, Size},
    stats::InventoryStats,
};

/// A size as sent by a client.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SizeRequest {
    /// Server-assigned id, or any client-local placeholder for new rows
    #[serde(default)]
    pub id: Option<String>,

    /// Size label, e.g. `M` or `42`
    #[serde(default)]
    pub value: String,
}

/// A color and its sizes as sent by a client.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ColorVariantRequest {
    /// Server-assigned id, or any client-local placeholder for new rows
    #[serde(default)]
    pub id: Option<String>,

    /// Color name
    #[serde(default)]
    pub name: String,

    /// Available sizes, at least one
    #[serde(default)]
    pub sizes: Vec<SizeRequest>,
}

impl From<SizeRequest> for NewSize {
    fn from(request: SizeRequest) -> Self {
        NewSize {
            id: request.id,
            value: request.value,
        }
    }
}

impl From<ColorVariantRequest> for NewColorVariant {
    fn from(request: ColorVariantRequest) -> Self {
        NewColorVariant {
            id: request.id,
            name: request.name,
            sizes: request.sizes.into_iter().map(Into::into).collect(),
        }
    }
}

/// Create Product Request
///
/// Missing fields default to empty so every problem is reported at once by
/// validation rather than by the JSON decoder.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct CreateProductRequest {
    pub model_number: String,
    pub specifications: String,
    pub company_name: String,
    pub piece_type: String,
    pub image_url: Option<String>,
    pub online_price: Option<String>,
    pub store_price: Option<String>,
    pub colors_and_sizes: Vec<ColorVariantRequest>,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(request: CreateProductRequest) -> Self {
        NewProduct {
            model_number: request.model_number,
            specifications: request.specifications,
            company_name: request.company_name,
            piece_type: request.piece_type,
            image_url: request.image_url,
            online_price: request.online_price,
            store_price: request.store_price,
            colors_and_sizes: request
                .colors_and_sizes
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}

/// Update Product Request
///
/// Only the fields present are changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct UpdateProductRequest {
    pub model_number: Option<String>,
    pub specifications: Option<String>,
    pub company_name: Option<String>,
    pub piece_type: Option<String>,
    pub image_url: Option<String>,
    pub online_price: Option<String>,
    pub store_price: Option<String>,
    pub colors_and_sizes: Option<Vec<ColorVariantRequest>>,
}

impl From<UpdateProductRequest> for ProductUpdate {
    fn from(request: UpdateProductRequest) -> Self {
        ProductUpdate {
            model_number: request.model_number,
            specifications: request.specifications,
            company_name: request.company_name,
            piece_type: request.piece_type,
            image_url: request.image_url,
            online_price: request.online_price,
            store_price: request.store_price,
            colors_and_sizes: request
                .colors_and_sizes
                .map(|colors| colors.into_iter().map(Into::into).collect()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SizeResponse {
    pub id: Uuid,
    pub value: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ColorVariantResponse {
    pub id: Uuid,
    pub name: String,
    pub sizes: Vec<SizeResponse>,
}

impl From<Size> for SizeResponse {
    fn from(size: Size) -> Self {
        SizeResponse {
            id: size.id.into(),
            value: size.value,
        }
    }
}

impl From<ColorVariant> for ColorVariantResponse {
    fn from(color: ColorVariant) -> Self {
        ColorVariantResponse {
            id: color.id.into(),
            name: color.name,
            sizes: color.sizes.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub id: Uuid,

    /// Business-unique model number
    pub model_number: String,

    pub specifications: String,
    pub company_name: String,
    pub piece_type: String,
    pub image_url: Option<String>,
    pub online_price: Option<String>,
    pub store_price: Option<String>,
    pub colors_and_sizes: Vec<ColorVariantResponse>,

    /// The date and time the product was created
    #[salvo(schema(value_type = String, format = DateTime))]
    pub created_at: Timestamp,

    /// The date and time the product was last updated
    #[salvo(schema(value_type = String, format = DateTime))]
    pub updated_at: Timestamp,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            id: product.uuid.into(),
            model_number: product.model_number,
            specifications: product.specifications,
            company_name: product.company_name,
            piece_type: product.piece_type,
            image_url: product.image_url,
            online_price: product.online_price,
            store_price: product.store_price,
            colors_and_sizes: product
                .colors_and_sizes
                .into_iter()
                .map(Into::into)
                .collect(),
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InventoryStatsResponse {
    pub total_products: usize,
    pub total_colors: usize,
    pub total_sizes: usize,
    pub unique_companies: usize,
}

impl From<InventoryStats> for InventoryStatsResponse {
    fn from(stats: InventoryStats) -> Self {
        InventoryStatsResponse {
            total_products: stats.total_products,
            total_colors: stats.total_colors,
            total_sizes: stats.total_sizes,
            unique_companies: stats.unique_companies,
        }
    }
}
