// src/api/content.rs

use serde_json::Value;

use crate::{
    api::client::ApiClient,
    endpoints,
    error::AppError,
    models::content::{CalendarMonth, Content},
};

impl ApiClient {
    /// Lists library entries, optionally restricted to one type (`tantara`, `ohabolana`, ...).
    pub async fn list_contents(&self, kind: Option<&str>) -> Result<Vec<Content>, AppError> {
        let url = match kind {
            Some(kind) => endpoints::contents_by_type(self.base(), kind)?,
            None => self.url(endpoints::CONTENTS)?,
        };
        let contents: Option<Vec<Content>> = self.get_url(url).await?;
        Ok(contents.unwrap_or_default())
    }

    /// Category names. Accepts plain strings or objects carrying `nom`, `name` or `label`.
    pub async fn list_categories(&self) -> Result<Vec<String>, AppError> {
        let raw: Option<Vec<Value>> = self.get(endpoints::CONTENT_CATEGORIES).await?;
        Ok(raw.unwrap_or_default().iter().filter_map(category_name).collect())
    }

    pub async fn get_content(&self, id: i64) -> Result<Content, AppError> {
        self.get(&endpoints::content(id)).await
    }

    /// First proverb of the day, if any.
    pub async fn daily_proverb(&self) -> Result<Option<Content>, AppError> {
        let proverbs: Option<Vec<Content>> = self.get(&endpoints::daily_proverb()).await?;
        Ok(proverbs.and_then(|p| p.into_iter().next()))
    }

    pub async fn calendar(&self) -> Result<Vec<CalendarMonth>, AppError> {
        let months: Option<Vec<CalendarMonth>> = self.get(endpoints::CALENDAR).await?;
        Ok(months.unwrap_or_default())
    }
}

fn category_name(value: &Value) -> Option<String> {
    let name = match value {
        Value::String(s) => s.clone(),
        Value::Object(map) => ["nom", "name", "label"]
            .iter()
            .find_map(|k| map.get(*k).and_then(Value::as_str))
            .map(str::to_string)
            .unwrap_or_else(|| value.to_string()),
        Value::Null => return None,
        other => other.to_string(),
    };
    (!name.is_empty()).then_some(name)
}
