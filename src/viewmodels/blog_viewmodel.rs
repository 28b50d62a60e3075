// ============================================================================
// BLOG VIEWMODEL - LÓGICA DE LA LISTA DE BLOGS
// ============================================================================
// Tras cada mutación exitosa el caller re-sincroniza desde el servidor con
// load_snapshot(); no hay actualización local especulativa.
// ============================================================================

use crate::models::blog::BlogListSnapshot;
use crate::services::ApiClient;

/// ViewModel de blogs - SOLO lógica de negocio
pub struct BlogViewModel {
    api_client: ApiClient,
}

impl BlogViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
        }
    }

    /// Cargar el snapshot completo de posts + identidad del viewer
    pub async fn load_snapshot(&self) -> Result<BlogListSnapshot, String> {
        let response = self.api_client.get_blogs().await?;
        Ok(BlogListSnapshot::from(response))
    }

    /// Crear un post. Sin validación local de vacíos: se envía tal cual.
    pub async fn create_post(&self, title: &str, content: &str) -> Result<(), String> {
        let response = self.api_client.create_blog(title, content).await?;
        let outcome = response.into_result("Error creating blog.");
        if outcome.is_ok() {
            log::info!("✅ Blog creado");
        }
        outcome
    }

    /// Guardar la edición de un post. Un post borrado concurrentemente en
    /// otra pestaña falla del lado del servidor y llega aquí como Err normal.
    pub async fn edit_post(&self, blog_id: i64, title: &str, content: &str) -> Result<(), String> {
        let response = self.api_client.edit_blog(blog_id, title, content).await?;
        let outcome = response.into_result("Error editing blog.");
        if outcome.is_ok() {
            log::info!("✅ Blog {} editado", blog_id);
        }
        outcome
    }

    /// Borrar un post. El flag de success SÍ se chequea: sólo un borrado
    /// confirmado justifica recargar la lista.
    pub async fn delete_post(&self, blog_id: i64) -> Result<(), String> {
        let response = self.api_client.delete_blog(blog_id).await?;
        let outcome = response.into_result("Error deleting blog.");
        if outcome.is_ok() {
            log::info!("✅ Blog {} borrado", blog_id);
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use crate::models::auth::SimpleResponse;
    use crate::models::blog::{BlogListSnapshot, BlogPost};
    use crate::state::BlogState;

    fn rejected() -> SimpleResponse {
        serde_json::from_str(r#"{"success": false}"#).unwrap()
    }

    #[test]
    fn rejected_delete_maps_to_error() {
        assert_eq!(
            rejected().into_result("Error deleting blog."),
            Err("Error deleting blog.".to_string())
        );
    }

    #[test]
    fn confirmed_delete_maps_to_ok() {
        let response: SimpleResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert_eq!(response.into_result("Error deleting blog."), Ok(()));
    }

    #[test]
    fn rejected_delete_leaves_snapshot_untouched() {
        // Un borrado rechazado no dispara recarga: el snapshot queda igual
        let state = BlogState::new();
        state.set_snapshot(BlogListSnapshot {
            posts: vec![BlogPost {
                id: 1,
                user_id: 1,
                username: "ana".to_string(),
                title: "Hello".to_string(),
                content: "World".to_string(),
            }],
            viewer_id: Some(1),
        });

        let outcome = rejected().into_result("Error deleting blog.");
        assert!(outcome.is_err());

        let kept = state.get_snapshot().unwrap();
        assert_eq!(kept.posts.len(), 1);
        assert_eq!(kept.posts[0].id, 1);
    }
}

impl Default for BlogViewModel {
    fn default() -> Self {
        Self::new()
    }
}
