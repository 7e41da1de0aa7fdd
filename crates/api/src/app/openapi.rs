//! OpenAPI description of the HTTP surface.

use serde_json::json;
use utoipa::openapi::{
    content::ContentBuilder,
    info::InfoBuilder,
    path::{OperationBuilder, ParameterBuilder, ParameterIn, PathItemBuilder, PathItemType},
    request_body::RequestBodyBuilder,
    response::{Response, ResponseBuilder},
    schema::{AdditionalProperties, ArrayBuilder, ComponentsBuilder, ObjectBuilder, Ref, Schema, SchemaType},
    server::Server,
    OpenApi, OpenApiBuilder, PathsBuilder, RefOr, Required,
};

use storeapi_inventory::{Amount, NAME_MAX_LEN, NAME_MIN_LEN};

use crate::config::ApiConfig;

const TAG: &str = "items";

/// Build the document served at the configured docs path.
pub fn doc(config: &ApiConfig) -> OpenApi {
    let paths = PathsBuilder::new()
        .path(
            "/",
            PathItemBuilder::new()
                .operation(
                    PathItemType::Get,
                    OperationBuilder::new()
                        .description(Some("Landing page"))
                        .response(
                            "200",
                            RefOr::T(
                                ResponseBuilder::new()
                                    .description("A successful response")
                                    .content(
                                        "text/plain",
                                        ContentBuilder::new()
                                            .schema(object(ObjectBuilder::new().schema_type(SchemaType::String)))
                                            .build(),
                                    )
                                    .build(),
                            ),
                        )
                        .build(),
                )
                .build(),
        )
        .path(
            "/items",
            PathItemBuilder::new()
                .operation(
                    PathItemType::Get,
                    OperationBuilder::new()
                        .tag(TAG)
                        .description(Some("Get all items in the store"))
                        .response("200", json_response("A successful response", item_list()))
                        .build(),
                )
                .build(),
        )
        .path(
            "/item",
            PathItemBuilder::new()
                .operation(
                    PathItemType::Post,
                    OperationBuilder::new()
                        .tag(TAG)
                        .description(Some("Put an item in the store"))
                        .request_body(Some(item_body("Item to add")))
                        .response("201", json_response("A successful response. Item added", item_ref()))
                        .response("400", error_response("Validation error (includes duplicate name)"))
                        .build(),
                )
                .operation(
                    PathItemType::Patch,
                    OperationBuilder::new()
                        .tag(TAG)
                        .description(Some("Update the amount of an item in the store"))
                        .request_body(Some(item_body("Item to update, matched by name")))
                        .response("200", json_response("A successful response. Item updated", item_ref()))
                        .response("400", error_response("Validation error"))
                        .response("404", error_response("Item not found"))
                        .build(),
                )
                .build(),
        )
        .path(
            "/item/{name}",
            PathItemBuilder::new()
                .operation(
                    PathItemType::Get,
                    OperationBuilder::new()
                        .tag(TAG)
                        .description(Some("Get an item by name"))
                        .parameter(name_parameter("Name of the item to get"))
                        .response("200", json_response("A successful response", item_ref()))
                        .response("404", error_response("Item not found"))
                        .build(),
                )
                .operation(
                    PathItemType::Delete,
                    OperationBuilder::new()
                        .tag(TAG)
                        .description(Some("Delete an item by name"))
                        .parameter(name_parameter("Name of the item to delete"))
                        .response("204", empty_response("A successful response. No content to show"))
                        .response("404", error_response("Item not found"))
                        .build(),
                )
                .build(),
        )
        .path(
            "/reset",
            PathItemBuilder::new()
                .operation(
                    PathItemType::Post,
                    OperationBuilder::new()
                        .description(Some("Resets the store to its initial state"))
                        .response("204", empty_response("A successful response. No content"))
                        .build(),
                )
                .build(),
        )
        .build();

    let components = ComponentsBuilder::new()
        .schema("Item", item_schema())
        .schema("Error", error_schema())
        .build();

    OpenApiBuilder::new()
        .info(
            InfoBuilder::new()
                .title("Store API")
                .version(env!("CARGO_PKG_VERSION"))
                .description(Some("In-memory store of named, quantified items."))
                .build(),
        )
        .servers(Some(vec![Server::new(format!("{}:{}", config.base_url, config.port))]))
        .paths(paths)
        .components(Some(components))
        .build()
}

fn object(builder: ObjectBuilder) -> RefOr<Schema> {
    RefOr::T(Schema::Object(builder.build()))
}

fn item_ref() -> RefOr<Schema> {
    RefOr::Ref(Ref::from_schema_name("Item"))
}

fn item_list() -> RefOr<Schema> {
    RefOr::T(Schema::Array(ArrayBuilder::new().items(item_ref()).build()))
}

fn item_schema() -> RefOr<Schema> {
    object(
        ObjectBuilder::new()
            .schema_type(SchemaType::Object)
            .property(
                "name",
                object(
                    ObjectBuilder::new()
                        .schema_type(SchemaType::String)
                        .min_length(Some(NAME_MIN_LEN))
                        .max_length(Some(NAME_MAX_LEN))
                        .pattern(Some("^[A-Za-z0-9]+$"))
                        .description(Some("Item name, alphanumeric; surrounding whitespace is trimmed")),
                ),
            )
            .required("name")
            .property(
                "amount",
                object(
                    ObjectBuilder::new()
                        .schema_type(SchemaType::Integer)
                        .minimum(Some(Amount::MIN as f64))
                        .description(Some("Number of units")),
                ),
            )
            .required("amount")
            .additional_properties(Some(AdditionalProperties::<Schema>::FreeForm(false)))
            .example(Some(json!({"name": "chair", "amount": 5}))),
    )
}

fn error_schema() -> RefOr<Schema> {
    object(
        ObjectBuilder::new()
            .schema_type(SchemaType::Object)
            .property(
                "error",
                object(
                    ObjectBuilder::new()
                        .schema_type(SchemaType::String)
                        .description(Some("Human-readable message")),
                ),
            )
            .required("error")
            .property(
                "code",
                object(
                    ObjectBuilder::new()
                        .schema_type(SchemaType::String)
                        .description(Some("Machine-readable error kind")),
                ),
            )
            .required("code"),
    )
}

fn name_parameter(description: &str) -> utoipa::openapi::path::Parameter {
    ParameterBuilder::new()
        .name("name")
        .parameter_in(ParameterIn::Path)
        .required(Required::True)
        .description(Some(description))
        .schema(Some(object(ObjectBuilder::new().schema_type(SchemaType::String))))
        .build()
}

fn item_body(description: &str) -> utoipa::openapi::request_body::RequestBody {
    RequestBodyBuilder::new()
        .description(Some(description))
        .content("application/json", ContentBuilder::new().schema(item_ref()).build())
        .required(Some(Required::True))
        .build()
}

fn json_response(description: &str, schema: RefOr<Schema>) -> RefOr<Response> {
    RefOr::T(
        ResponseBuilder::new()
            .description(description)
            .content("application/json", ContentBuilder::new().schema(schema).build())
            .build(),
    )
}

fn error_response(description: &str) -> RefOr<Response> {
    json_response(description, RefOr::Ref(Ref::from_schema_name("Error")))
}

fn empty_response(description: &str) -> RefOr<Response> {
    RefOr::T(ResponseBuilder::new().description(description).build())
}
