pub mod models;
pub mod routes;
pub mod store;

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    routing::{get, post},
    Router,
};
use saga_kernel::{InitCtx, Module};
use serde_json::json;
use sqlx::PgPool;

use store::StoryStore;

/// Story module: CRUD over the `story` table, mounted at `/api/story`.
pub struct StoryModule {
    store: StoryStore,
}

impl StoryModule {
    pub fn new(pool: PgPool) -> Self {
        Self {
            store: StoryStore::new(pool),
        }
    }
}

#[async_trait]
impl Module for StoryModule {
    fn name(&self) -> &'static str {
        "story"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "story module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        let prefix = crate::utils::log_prefix(self.name());
        tracing::debug!(target: "saga.routes", %prefix, "building story routes");

        Router::new()
            .route("/", post(routes::create_story).get(routes::list_stories))
            .route(
                "/{slug}",
                get(routes::get_story).delete(routes::delete_story),
            )
            .with_state(self.store.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(json!({
            "paths": {
                "/": {
                    "post": {
                        "summary": "Create a story",
                        "tags": ["Story"],
                        "requestBody": {
                            "required": true,
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "$ref": "#/components/schemas/StoryDraft"
                                    }
                                }
                            }
                        },
                        "responses": {
                            "200": {
                                "description": "Story saved",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "$ref": "#/components/schemas/MessageResponse"
                                        }
                                    }
                                }
                            },
                            "403": {
                                "description": "A required field is missing or empty",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "$ref": "#/components/schemas/MessageResponse"
                                        }
                                    }
                                }
                            },
                            "500": {
                                "description": "Persistence fault",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "$ref": "#/components/schemas/MessageResponse"
                                        }
                                    }
                                }
                            }
                        }
                    },
                    "get": {
                        "summary": "List stories, newest update first",
                        "tags": ["Story"],
                        "parameters": [
                            {
                                "name": "author",
                                "in": "query",
                                "required": false,
                                "description": "Exact author name to filter by",
                                "schema": {
                                    "type": "string"
                                }
                            }
                        ],
                        "responses": {
                            "200": {
                                "description": "Matching stories",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "object",
                                            "properties": {
                                                "stories": {
                                                    "type": "array",
                                                    "items": {
                                                        "$ref": "#/components/schemas/Story"
                                                    }
                                                }
                                            },
                                            "required": ["stories"]
                                        }
                                    }
                                }
                            },
                            "500": {
                                "description": "Persistence fault",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "$ref": "#/components/schemas/MessageResponse"
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
                "/{slug}": {
                    "get": {
                        "summary": "Fetch a story by slug",
                        "tags": ["Story"],
                        "parameters": [
                            {
                                "name": "slug",
                                "in": "path",
                                "required": true,
                                "schema": {
                                    "type": "string"
                                }
                            }
                        ],
                        "responses": {
                            "200": {
                                "description": "The story's fields at the top level, or null when the slug is unknown",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "$ref": "#/components/schemas/Story"
                                        }
                                    }
                                }
                            },
                            "500": {
                                "description": "Persistence fault",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "$ref": "#/components/schemas/MessageResponse"
                                        }
                                    }
                                }
                            }
                        }
                    },
                    "delete": {
                        "summary": "Delete a story by slug",
                        "tags": ["Story"],
                        "parameters": [
                            {
                                "name": "slug",
                                "in": "path",
                                "required": true,
                                "schema": {
                                    "type": "string"
                                }
                            }
                        ],
                        "responses": {
                            "200": {
                                "description": "Confirmation, whether or not a matching record existed",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "$ref": "#/components/schemas/MessageResponse"
                                        }
                                    }
                                }
                            },
                            "500": {
                                "description": "Persistence fault",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "$ref": "#/components/schemas/MessageResponse"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "Story": {
                        "type": "object",
                        "properties": {
                            "id": {
                                "type": "string",
                                "format": "uuid",
                                "description": "Surrogate identifier generated by the database"
                            },
                            "slug": {
                                "type": "string",
                                "description": "Unique slug, `<title>-<creation epoch millis>`"
                            },
                            "title": {
                                "type": "string"
                            },
                            "image": {
                                "type": "string",
                                "description": "Cover image URL"
                            },
                            "category": {
                                "type": "string"
                            },
                            "synopsis": {
                                "type": "string"
                            },
                            "author": {
                                "type": "string"
                            },
                            "content": {
                                "type": "string"
                            },
                            "updatedAt": {
                                "type": "string",
                                "format": "date-time",
                                "description": "Maintained by the database on write"
                            }
                        },
                        "required": [
                            "id", "slug", "title", "image", "category",
                            "synopsis", "author", "content", "updatedAt"
                        ]
                    },
                    "StoryDraft": {
                        "type": "object",
                        "properties": {
                            "title": {
                                "type": "string"
                            },
                            "image": {
                                "type": "string"
                            },
                            "category": {
                                "type": "string"
                            },
                            "synopsis": {
                                "type": "string"
                            },
                            "author": {
                                "type": "string"
                            },
                            "content": {
                                "type": "string"
                            }
                        },
                        "required": [
                            "title", "image", "category", "synopsis", "author", "content"
                        ]
                    }
                }
            }
        }))
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "story module started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "story module stopped");
        Ok(())
    }
}

/// Create a new instance of the story module
pub fn create_module(pool: PgPool) -> Arc<dyn Module> {
    Arc::new(StoryModule::new(pool))
}
