use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use caption_coach::tips::improvement_tips;
use caption_coach::{AnalysisResult, CaptionVariants, Platform};

#[derive(Debug, Deserialize)]
pub struct ApiAnalyzeRequest {
    pub text: Option<String>,
    pub platform: Option<String>,
    pub exclude_tags: Option<Vec<String>>,
    pub nonce: Option<u64>,
    pub include_variants: Option<bool>,
}

pub struct AnalyzeParams {
    pub text: String,
    pub platform: Platform,
    pub exclude: HashSet<String>,
    pub nonce: u64,
    pub include_variants: bool,
}

impl ApiAnalyzeRequest {
    pub fn into_params(self) -> Result<AnalyzeParams, String> {
        let text = self.text.unwrap_or_default().trim().to_string();
        if text.is_empty() {
            return Err("text is required".to_string());
        }

        let platform = match self.platform.as_deref() {
            Some(value) => {
                Platform::from_str(value).ok_or_else(|| format!("invalid platform: {}", value))?
            }
            None => Platform::Twitter,
        };

        let exclude = self
            .exclude_tags
            .unwrap_or_default()
            .into_iter()
            .map(|tag| tag.to_lowercase())
            .collect();

        Ok(AnalyzeParams {
            text,
            platform,
            exclude,
            nonce: self.nonce.unwrap_or(0),
            include_variants: self.include_variants.unwrap_or(false),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ApiAnalyzeResponse {
    pub platform: String,
    pub result: AnalysisResult,
    pub variants: Option<CaptionVariants>,
    pub tips: Vec<String>,
    pub warnings: Vec<String>,
}

impl ApiAnalyzeResponse {
    pub fn from_result(
        platform: Platform,
        result: AnalysisResult,
        variants: Option<CaptionVariants>,
        warnings: Vec<String>,
    ) -> Self {
        let tips = improvement_tips(&result);
        Self {
            platform: platform.label().to_string(),
            result,
            variants,
            tips,
            warnings,
        }
    }
}
