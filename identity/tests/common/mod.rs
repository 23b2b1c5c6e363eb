use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::AuthGate;
use auth::Clock;
use auth::PasswordHasher;
use auth::SystemClock;
use auth::TokenIssuer;
use auth::TokenValidator;
use identity::domain::auth::errors::CredentialStoreError;
use identity::domain::auth::models::Credential;
use identity::domain::auth::models::CredentialId;
use identity::domain::auth::models::EmailAddress;
use identity::domain::auth::ports::CredentialStore;
use identity::domain::auth::service::AuthService;
use identity::inbound::http::router::create_router;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server over an in-memory credential
/// store.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub store: Arc<InMemoryCredentialStore>,
    pub validator: TokenValidator,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "identity=debug".into()),
            )
            .try_init();

        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let store = Arc::new(InMemoryCredentialStore::new());
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);

        let issuer =
            TokenIssuer::new(TEST_SECRET, Arc::clone(&clock)).expect("Failed to create issuer");
        let gate = Arc::new(AuthGate::new(
            TokenValidator::new(TEST_SECRET, Arc::clone(&clock))
                .expect("Failed to create validator"),
        ));

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&store),
            issuer,
            chrono::Duration::minutes(15),
            chrono::Duration::hours(168),
        ));

        let router = create_router(auth_service, gate);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        let validator =
            TokenValidator::new(TEST_SECRET, clock).expect("Failed to create validator");

        Self {
            address,
            api_client: reqwest::Client::new(),
            store,
            validator,
        }
    }

    /// Seed a credential into the store and return its id.
    pub async fn register(&self, email: &str, password: &str) -> CredentialId {
        let hasher = PasswordHasher::new();
        let credential = Credential {
            id: CredentialId::new(),
            email: EmailAddress::new(email.to_string()).expect("Invalid test email"),
            password_hash: hasher.hash(password).expect("Failed to hash password"),
        };
        let id = credential.id;
        self.store.insert(credential);
        id
    }

    /// Issue a token outside the login flow, signed with the app's secret.
    pub fn issue_token(&self, subject: &str, ttl: chrono::Duration) -> String {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        TokenIssuer::new(TEST_SECRET, clock)
            .expect("Failed to create issuer")
            .issue(subject, ttl)
            .expect("Failed to issue token")
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }
}

/// Credential store backed by an in-memory map, standing in for the external
/// store collaborator.
pub struct InMemoryCredentialStore {
    credentials: Mutex<HashMap<String, Credential>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self {
            credentials: Mutex::new(HashMap::new()),
        }
    }

    pub fn insert(&self, credential: Credential) {
        self.credentials
            .lock()
            .unwrap()
            .insert(credential.email.as_str().to_string(), credential);
    }

    pub fn remove(&self, id: &CredentialId) {
        self.credentials
            .lock()
            .unwrap()
            .retain(|_, credential| credential.id != *id);
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Credential>, CredentialStoreError> {
        Ok(self
            .credentials
            .lock()
            .unwrap()
            .get(email.as_str())
            .cloned())
    }

    async fn find_by_id(
        &self,
        id: &CredentialId,
    ) -> Result<Option<Credential>, CredentialStoreError> {
        Ok(self
            .credentials
            .lock()
            .unwrap()
            .values()
            .find(|credential| credential.id == *id)
            .cloned())
    }
}
