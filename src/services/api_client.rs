// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP.
// La sesión viaja implícita en la cookie; no hay token en el body.
// ============================================================================

use futures_util::future::{select, Either};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;
use std::pin::Pin;

use crate::config::CONFIG;
use crate::models::auth::{LoginRequest, SignupRequest, SimpleResponse, UpdateProfileRequest};
use crate::models::blog::{BlogTextRequest, GetBlogsResponse};
use crate::models::session::CheckLoginResponse;

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    timeout_ms: u32,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.backend_url().to_string(),
            timeout_ms: CONFIG.network_timeout_ms,
        }
    }

    /// Consultar estado de login
    pub async fn check_login(&self) -> Result<CheckLoginResponse, String> {
        let url = format!("{}/check_login", self.base_url);
        let response = self.send_get(&url).await?;
        Self::parse_json(response).await
    }

    /// Login con display name + password
    pub async fn login(&self, display_name: &str, password: &str) -> Result<SimpleResponse, String> {
        let url = format!("{}/login", self.base_url);
        let request = LoginRequest {
            display_name: display_name.to_string(),
            password: password.to_string(),
        };

        log::info!("🔐 Login para usuario: {}", display_name);

        let response = self.send_json(&url, &request).await?;
        Self::parse_json(response).await
    }

    /// Registrar usuario nuevo
    pub async fn signup(&self, display_name: &str, password: &str) -> Result<SimpleResponse, String> {
        let url = format!("{}/signup", self.base_url);
        let request = SignupRequest {
            display_name: display_name.to_string(),
            password: password.to_string(),
        };

        log::info!("📝 Signup para usuario: {}", display_name);

        let response = self.send_json(&url, &request).await?;
        Self::parse_json(response).await
    }

    /// Cerrar sesión
    pub async fn logout(&self) -> Result<SimpleResponse, String> {
        let url = format!("{}/logout", self.base_url);

        log::info!("👋 Logout");

        let response = self.send_post_empty(&url).await?;
        Self::parse_json(response).await
    }

    /// Actualizar perfil (requiere old_password de confirmación)
    pub async fn update_profile(
        &self,
        old_password: &str,
        display_name: &str,
        password: &str,
    ) -> Result<SimpleResponse, String> {
        let url = format!("{}/update_profile", self.base_url);
        let request = UpdateProfileRequest {
            old_password: old_password.to_string(),
            display_name: display_name.to_string(),
            password: password.to_string(),
        };

        log::info!("⚙️ Actualizando perfil");

        let response = self.send_json(&url, &request).await?;
        Self::parse_json(response).await
    }

    /// Obtener todos los blogs más la identidad del viewer
    pub async fn get_blogs(&self) -> Result<GetBlogsResponse, String> {
        let url = format!("{}/get_blogs", self.base_url);

        log::info!("📋 Obteniendo blogs");

        let response = self.send_get(&url).await?;
        let data: GetBlogsResponse = Self::parse_json(response).await?;

        log::info!("✅ Blogs recibidos: {}", data.blogs.len());
        Ok(data)
    }

    /// Crear blog nuevo
    pub async fn create_blog(&self, title: &str, content: &str) -> Result<SimpleResponse, String> {
        let url = format!("{}/create_blog", self.base_url);
        let request = BlogTextRequest {
            title: title.to_string(),
            content: content.to_string(),
        };

        log::info!("✍️ Creando blog: {}", title);

        let response = self.send_json(&url, &request).await?;
        Self::parse_json(response).await
    }

    /// Editar blog existente
    pub async fn edit_blog(
        &self,
        blog_id: i64,
        title: &str,
        content: &str,
    ) -> Result<SimpleResponse, String> {
        let url = format!("{}/edit_blog/{}", self.base_url, blog_id);
        let request = BlogTextRequest {
            title: title.to_string(),
            content: content.to_string(),
        };

        log::info!("📝 Editando blog: {}", blog_id);

        let response = self.send_json(&url, &request).await?;
        Self::parse_json(response).await
    }

    /// Borrar blog
    pub async fn delete_blog(&self, blog_id: i64) -> Result<SimpleResponse, String> {
        let url = format!("{}/delete_blog/{}", self.base_url, blog_id);

        log::info!("🗑️ Borrando blog: {}", blog_id);

        let response = self.send_post_empty(&url).await?;
        Self::parse_json(response).await
    }

    // ------------------------------------------------------------------
    // Helpers internos
    // ------------------------------------------------------------------

    async fn send_get(&self, url: &str) -> Result<Response, String> {
        let future = Request::get(url).send();
        let response = self
            .with_timeout(Box::pin(future))
            .await?
            .map_err(|e| format!("Network error: {}", e))?;
        Self::check_status(response)
    }

    async fn send_post_empty(&self, url: &str) -> Result<Response, String> {
        let request = Request::post(url)
            .build()
            .map_err(|e| format!("Request build error: {}", e))?;
        let response = self
            .with_timeout(Box::pin(request.send()))
            .await?
            .map_err(|e| format!("Network error: {}", e))?;
        Self::check_status(response)
    }

    async fn send_json<T: Serialize>(&self, url: &str, body: &T) -> Result<Response, String> {
        let request = Request::post(url)
            .json(body)
            .map_err(|e| format!("Serialization error: {}", e))?;
        let response = self
            .with_timeout(Box::pin(request.send()))
            .await?
            .map_err(|e| format!("Network error: {}", e))?;
        Self::check_status(response)
    }

    /// Impone el timeout configurado; la expiración es un fallo de red normal
    async fn with_timeout<T>(
        &self,
        future: Pin<Box<dyn Future<Output = T>>>,
    ) -> Result<T, String> {
        let timeout = Box::pin(TimeoutFuture::new(self.timeout_ms));
        match select(future, timeout).await {
            Either::Left((value, _)) => Ok(value),
            Either::Right(_) => {
                log::warn!("⏰ Request sin respuesta tras {} ms", self.timeout_ms);
                Err(format!("Network error: timeout after {} ms", self.timeout_ms))
            }
        }
    }

    fn check_status(response: Response) -> Result<Response, String> {
        if response.ok() {
            Ok(response)
        } else {
            Err(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            ))
        }
    }

    async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
        response
            .json::<T>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
