use crate::actions::{Action, CategoryAction};
use crate::effect::{Effect, Effects};
use crate::middleware::Middleware;
use crate::state::AppState;
use kwiz_services::ContentService;
use std::sync::Arc;

/// Category middleware - loads the category catalog from the content service
pub struct CategoryMiddleware {
    content: Arc<dyn ContentService>,
}

impl CategoryMiddleware {
    pub fn new(content: Arc<dyn ContentService>) -> Self {
        Self { content }
    }
}

impl Middleware for CategoryMiddleware {
    fn handle(&mut self, action: Action, _state: &AppState, effects: &mut Effects) -> Action {
        if let Action::Category(CategoryAction::LoadCategories) = &action {
            let content = Arc::clone(&self.content);
            effects.push(Effect::task(
                "load_categories",
                async move {
                    let categories = content.categories().await?;
                    log::info!("CategoryMiddleware: Loaded {} categories", categories.len());
                    Ok(CategoryAction::CategoriesLoaded(categories).into())
                },
                |e| CategoryAction::CategoriesLoadFailed(e).into(),
            ));
        }
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{category, run_effects, FakeContent};
    use kwiz_domain::AppError;

    #[tokio::test]
    async fn test_load_categories() {
        let content = Arc::new(FakeContent::new(vec![category("math"), category("art")]));
        let mut middleware = CategoryMiddleware::new(content);
        let mut effects = Effects::new();

        middleware.handle(
            CategoryAction::LoadCategories.into(),
            &AppState::default(),
            &mut effects,
        );

        assert_eq!(
            run_effects(effects).await,
            vec![Action::Category(CategoryAction::CategoriesLoaded(vec![
                category("math"),
                category("art")
            ]))]
        );
    }

    #[tokio::test]
    async fn test_load_failure() {
        let error = AppError::Network("offline".into());
        let content = Arc::new(FakeContent::new(vec![]).failing(error.clone()));
        let mut middleware = CategoryMiddleware::new(content);
        let mut effects = Effects::new();

        middleware.handle(
            CategoryAction::LoadCategories.into(),
            &AppState::default(),
            &mut effects,
        );

        assert_eq!(
            run_effects(effects).await,
            vec![Action::Category(CategoryAction::CategoriesLoadFailed(error))]
        );
    }
}
