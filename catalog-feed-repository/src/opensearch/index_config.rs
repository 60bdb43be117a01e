//! OpenSearch index settings and mappings.

use serde_json::{json, Value};

/// Settings for the key-value index.
///
/// The record is stored as an opaque string; only the timestamp is indexed.
pub fn key_value_index_settings() -> Value {
    json!({
        "settings": {
            "number_of_shards": 1,
            "number_of_replicas": 0
        },
        "mappings": {
            "properties": {
                "value": {
                    "type": "keyword",
                    "index": false,
                    "doc_values": false
                },
                "updated_at": {
                    "type": "date"
                }
            }
        }
    })
}

/// Settings for the vector index.
///
/// `dimensions` must match the output length of the embedding provider.
pub fn vector_index_settings(dimensions: usize) -> Value {
    json!({
        "settings": {
            "index": {
                "knn": true
            },
            "number_of_shards": 1,
            "number_of_replicas": 0
        },
        "mappings": {
            "properties": {
                "text": {
                    "type": "text"
                },
                "metadata": {
                    "properties": {
                        "id": {
                            "type": "keyword"
                        }
                    }
                },
                "embedding": {
                    "type": "knn_vector",
                    "dimension": dimensions,
                    "method": {
                        "name": "hnsw",
                        "space_type": "cosinesimil",
                        "engine": "lucene"
                    }
                },
                "indexed_at": {
                    "type": "date"
                }
            }
        }
    })
}
