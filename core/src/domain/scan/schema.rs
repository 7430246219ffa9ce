use serde_json::json;

/// JSON schema handed to providers that support constrained output.
pub fn analysis_response_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "productName": { "type": "string" },
            "results": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "ingredientName": { "type": "string" },
                        "risk": {
                            "type": "string",
                            "enum": ["LOW", "MEDIUM", "HIGH"]
                        },
                        "severity": { "type": "string" },
                        "explanation": { "type": "string" },
                        "description": { "type": "string" },
                        "category": { "type": "string" },
                        "sideEffects": {
                            "type": "array",
                            "items": { "type": "string" }
                        }
                    },
                    "required": [
                        "ingredientName", "risk", "severity", "explanation",
                        "description", "category", "sideEffects"
                    ]
                }
            },
            "safetyScore": { "type": "integer" },
            "overallAssessment": { "type": "string" },
            "warningsFor": {
                "type": "array",
                "items": { "type": "string" }
            }
        },
        "required": ["productName", "results", "safetyScore", "overallAssessment", "warningsFor"]
    })
}
