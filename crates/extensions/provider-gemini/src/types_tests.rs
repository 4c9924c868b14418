use super::*;

#[test]
fn test_inline_data_uses_camel_case() {
    let part = Part::InlineData {
        inline_data: InlineData {
            mime_type: "image/png".to_string(),
            data: "AAAA".to_string(),
        },
    };
    let json = serde_json::to_value(&part).unwrap();
    assert_eq!(json["inlineData"]["mimeType"], "image/png");
    assert_eq!(json["inlineData"]["data"], "AAAA");
}

#[test]
fn test_file_data_serialization() {
    let part = Part::FileData {
        file_data: FileData {
            mime_type: "image/jpeg".to_string(),
            file_uri: "https://x.test/a.jpg".to_string(),
        },
    };
    let json = serde_json::to_value(&part).unwrap();
    assert_eq!(json["fileData"]["fileUri"], "https://x.test/a.jpg");
}

#[test]
fn test_request_field_names() {
    let request = GenerateContentRequest {
        contents: vec![],
        system_instruction: Content {
            role: None,
            parts: vec![Part::Text {
                text: "sys".to_string(),
            }],
        },
        generation_config: GenerationConfig {
            temperature: 0.2,
            max_output_tokens: 1000,
        },
    };
    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["generationConfig"]["maxOutputTokens"], 1000);
    assert_eq!(json["systemInstruction"]["parts"][0]["text"], "sys");
    assert!(json["systemInstruction"].get("role").is_none());
}

#[test]
fn test_response_parse() {
    let response: GenerateContentResponse = serde_json::from_str(
        r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"hi"}]},"finishReason":"STOP"}],"usageMetadata":{"promptTokenCount":3}}"#,
    )
    .unwrap();
    assert!(matches!(
        &response.candidates[0].content.parts[0],
        Part::Text { text } if text == "hi"
    ));
}
