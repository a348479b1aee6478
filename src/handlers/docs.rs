//! OpenAPI document and the interactive viewers that render it.

use axum::{Json, response::Html};
use serde_json::{Value, json};
use std::sync::LazyLock;

pub const OPENAPI_PATH: &str = "/openapi.json";

fn error_response(description: &str) -> Value {
    json!({
        "description": description,
        "content": json_body(schema_ref("ApiErrorResponse"))
    })
}

fn todo_response(description: &str) -> Value {
    json!({
        "description": description,
        "content": json_body(schema_ref("TodoOut"))
    })
}

fn todo_id_param() -> Value {
    json!({
        "name": "todo_id",
        "in": "path",
        "required": true,
        "schema": { "type": "integer", "format": "int32" }
    })
}

fn json_body(schema: Value) -> Value {
    json!({ "application/json": { "schema": schema } })
}

fn schema_ref(name: &str) -> Value {
    json!({ "$ref": format!("#/components/schemas/{name}") })
}

fn root_path() -> Value {
    json!({
        "get": {
            "summary": "Service banner",
            "responses": { "200": { "description": "Message and docs link" } }
        }
    })
}

fn health_path() -> Value {
    json!({
        "get": {
            "summary": "Liveness check",
            "responses": {
                "200": {
                    "description": "Process is serving requests",
                    "content": json_body(schema_ref("HealthStatus"))
                }
            }
        }
    })
}

fn ready_path() -> Value {
    json!({
        "get": {
            "summary": "Readiness check including a database round-trip",
            "responses": {
                "200": { "description": "Database reachable" },
                "503": { "description": "Database unreachable or not configured" }
            }
        }
    })
}

fn todos_path() -> Value {
    let list = json!({
        "summary": "List todos, newest first",
        "responses": {
            "200": {
                "description": "All todos",
                "content": json_body(json!({ "type": "array", "items": schema_ref("TodoOut") }))
            },
            "500": error_response("Database not configured"),
            "503": error_response("Database unreachable")
        }
    });
    let create = json!({
        "summary": "Create a todo",
        "requestBody": { "required": true, "content": json_body(schema_ref("TodoIn")) },
        "responses": {
            "201": todo_response("Created todo"),
            "400": error_response("Blank title or malformed JSON"),
            "415": error_response("Missing `Content-Type: application/json`"),
            "422": error_response("Body does not match TodoIn"),
            "500": error_response("Database not configured"),
            "503": error_response("Database unreachable")
        }
    });
    json!({ "get": list, "post": create })
}

fn todo_item_path() -> Value {
    let toggle = json!({
        "summary": "Toggle the done flag",
        "parameters": [todo_id_param()],
        "responses": {
            "200": todo_response("Updated todo"),
            "400": error_response("Non-integer todo_id"),
            "404": error_response("No such todo"),
            "500": error_response("Database not configured"),
            "503": error_response("Database unreachable")
        }
    });
    let delete = json!({
        "summary": "Delete a todo",
        "parameters": [todo_id_param()],
        "responses": {
            "204": { "description": "Deleted" },
            "400": error_response("Non-integer todo_id"),
            "404": error_response("No such todo"),
            "500": error_response("Database not configured"),
            "503": error_response("Database unreachable")
        }
    });
    json!({ "patch": toggle, "delete": delete })
}

fn schemas() -> Value {
    let todo_in = json!({
        "type": "object",
        "required": ["title"],
        "properties": { "title": { "type": "string" } }
    });
    let todo_out = json!({
        "type": "object",
        "required": ["id", "title", "done"],
        "properties": {
            "id": { "type": "integer", "format": "int32" },
            "title": { "type": "string" },
            "done": { "type": "boolean" }
        }
    });
    let health = json!({
        "type": "object",
        "required": ["service"],
        "properties": {
            "service": { "type": "string" },
            "database": { "type": "string" }
        }
    });
    let error = json!({
        "type": "object",
        "required": ["error"],
        "properties": {
            "error": {
                "type": "object",
                "required": ["code", "message"],
                "properties": {
                    "code": { "type": "string" },
                    "message": { "type": "string" }
                }
            }
        }
    });
    json!({
        "TodoIn": todo_in,
        "TodoOut": todo_out,
        "HealthStatus": health,
        "ApiErrorResponse": error
    })
}

pub static OPENAPI: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "openapi": "3.1.0",
        "info": {
            "title": "Lightsail Todo API",
            "version": env!("CARGO_PKG_VERSION")
        },
        "paths": {
            "/": root_path(),
            "/health": health_path(),
            "/health/ready": ready_path(),
            "/todos": todos_path(),
            "/todos/{todo_id}": todo_item_path()
        },
        "components": { "schemas": schemas() }
    })
});

const SWAGGER_UI_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Lightsail Todo API - Swagger UI</title>
<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
<div id="swagger-ui"></div>
<script src="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
<script>
const ui = SwaggerUIBundle({
    url: '/openapi.json',
    dom_id: '#swagger-ui',
    layout: 'BaseLayout',
    deepLinking: true,
    presets: [SwaggerUIBundle.presets.apis, SwaggerUIBundle.SwaggerUIStandalonePreset],
});
</script>
</body>
</html>
"#;

const REDOC_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Lightsail Todo API - ReDoc</title>
</head>
<body>
<redoc spec-url="/openapi.json"></redoc>
<script src="https://cdn.jsdelivr.net/npm/redoc@2/bundles/redoc.standalone.js"></script>
</body>
</html>
"#;

/// GET /openapi.json
pub async fn openapi_json() -> Json<Value> {
    Json(OPENAPI.clone())
}

/// GET /docs
pub async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_UI_HTML)
}

/// GET /redoc
pub async fn redoc() -> Html<&'static str> {
    Html(REDOC_HTML)
}
