use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ItemDoc { pub title: String, pub description: String, pub complete: bool }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateResultDoc { pub old: ItemDoc, pub new: ItemDoc }

#[derive(ToSchema)]
pub struct DescriptionDoc { pub description: String }

#[derive(ToSchema)]
pub struct DecodeErrorDoc { pub error: String, pub category: String, pub line: usize, pub column: usize }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::items::list_items,
        crate::routes::items::get_item,
        crate::routes::items::create_item,
        crate::routes::items::replace_item,
        crate::routes::items::acknowledge_put,
        crate::routes::items::delete_item,
    ),
    components(
        schemas(
            HealthResponse,
            ItemDoc,
            UpdateResultDoc,
            DescriptionDoc,
            DecodeErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "items")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_item_paths() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let paths = doc["paths"].as_object().unwrap();
        assert!(paths.contains_key("/api/v1/items"));
        assert!(paths.contains_key("/api/v1/items/{title}"));
        assert!(paths.contains_key("/health"));
        let item = &doc["components"]["schemas"]["ItemDoc"]["properties"];
        assert!(item.get("Title").is_some());
    }
}
