// ============================================================================
// BLOG - Posts y snapshot de la lista (formato de /get_blogs)
// ============================================================================

use serde::{Deserialize, Serialize};

/// Un post tal como lo entrega el servidor. El cliente sólo tiene una copia
/// de lectura por ciclo de render; el servidor es el dueño del dato.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct BlogPost {
    pub id: i64,
    pub user_id: i64,
    pub username: String,
    pub title: String,
    pub content: String,
}

/// Respuesta de GET /get_blogs
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct GetBlogsResponse {
    pub blogs: Vec<BlogPost>,
    #[serde(default)]
    pub current_user_id: Option<i64>,
}

/// Snapshot inmutable de la lista de posts más la identidad del viewer.
///
/// Se reconstruye completo en cada carga/mutación; no hay diffing ni
/// actualización parcial en el cliente.
#[derive(Clone, PartialEq, Debug)]
pub struct BlogListSnapshot {
    pub posts: Vec<BlogPost>,
    pub viewer_id: Option<i64>,
}

impl BlogListSnapshot {
    /// El viewer puede editar/borrar un post sólo si es el autor.
    ///
    /// Chequeo de UI solamente: el servidor es la autoridad real. El
    /// current_user_id del mismo snapshot es la única fuente de identidad,
    /// nunca se infiere ownership de otra forma.
    pub fn is_owned(&self, post: &BlogPost) -> bool {
        match self.viewer_id {
            Some(viewer_id) => post.user_id == viewer_id,
            None => false,
        }
    }
}

impl From<GetBlogsResponse> for BlogListSnapshot {
    fn from(response: GetBlogsResponse) -> Self {
        Self {
            posts: response.blogs,
            viewer_id: response.current_user_id,
        }
    }
}

/// Cuerpo de POST /create_blog y POST /edit_blog/{id}
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct BlogTextRequest {
    pub title: String,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: i64, user_id: i64) -> BlogPost {
        BlogPost {
            id,
            user_id,
            username: format!("user{}", user_id),
            title: "Hello".to_string(),
            content: "World".to_string(),
        }
    }

    #[test]
    fn ownership_requires_matching_author() {
        let snapshot = BlogListSnapshot {
            posts: vec![post(1, 10), post(2, 20)],
            viewer_id: Some(10),
        };
        assert!(snapshot.is_owned(&snapshot.posts[0]));
        assert!(!snapshot.is_owned(&snapshot.posts[1]));
    }

    #[test]
    fn anonymous_viewer_owns_nothing() {
        let snapshot = BlogListSnapshot {
            posts: vec![post(1, 10)],
            viewer_id: None,
        };
        assert!(!snapshot.is_owned(&snapshot.posts[0]));
    }

    #[test]
    fn snapshot_preserves_server_order() {
        let json = r#"{
            "blogs": [
                {"id": 3, "user_id": 1, "username": "ana", "title": "c", "content": "x"},
                {"id": 1, "user_id": 2, "username": "bob", "title": "a", "content": "y"},
                {"id": 2, "user_id": 1, "username": "ana", "title": "b", "content": "z"}
            ],
            "current_user_id": 1
        }"#;
        let response: GetBlogsResponse = serde_json::from_str(json).unwrap();
        let snapshot = BlogListSnapshot::from(response);
        let ids: Vec<i64> = snapshot.posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(snapshot.viewer_id, Some(1));
    }

    #[test]
    fn missing_current_user_id_means_anonymous() {
        let json = r#"{"blogs": []}"#;
        let response: GetBlogsResponse = serde_json::from_str(json).unwrap();
        let snapshot = BlogListSnapshot::from(response);
        assert_eq!(snapshot.viewer_id, None);
    }

    #[test]
    fn same_response_yields_identical_snapshots() {
        // Cargar dos veces sin mutación intermedia produce el mismo conjunto y orden
        let json = r#"{
            "blogs": [
                {"id": 1, "user_id": 1, "username": "ana", "title": "a", "content": "x"},
                {"id": 2, "user_id": 1, "username": "ana", "title": "b", "content": "y"}
            ],
            "current_user_id": null
        }"#;
        let first = BlogListSnapshot::from(serde_json::from_str::<GetBlogsResponse>(json).unwrap());
        let second = BlogListSnapshot::from(serde_json::from_str::<GetBlogsResponse>(json).unwrap());
        assert_eq!(first, second);
    }
}
