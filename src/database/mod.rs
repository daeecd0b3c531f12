use mongodb::bson::doc;
use mongodb::{Client, Collection, Database};
use std::env;

/// Default Atlas cluster host, overridable via `DB_HOST`.
const DEFAULT_CLUSTER_HOST: &str = "cluster0.ptiwh.mongodb.net";
const DEFAULT_DATABASE: &str = "coffeeDB";

#[derive(Clone)]
pub struct MongoDB {
    client: Client,
    db: Database,
}

impl MongoDB {
    pub async fn new(uri: &str) -> Result<Self, mongodb::error::Error> {
        let client = Client::with_uri_str(uri).await?;
        let db = client.database(database_name_from_uri(uri));

        // Confirm the deployment is reachable before serving traffic
        db.run_command(doc! { "ping": 1 }).await?;

        Ok(Self { client, db })
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

/// Extract the database name from the URI path segment, or fall back to the
/// default. Atlas-style URIs (`...mongodb.net/?retryWrites=...`) carry no
/// path segment.
fn database_name_from_uri(uri: &str) -> &str {
    let after_scheme = uri.splitn(2, "://").nth(1).unwrap_or(uri);
    after_scheme
        .split_once('/')
        .and_then(|(_, rest)| rest.split('?').next())
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_DATABASE)
}

/// Resolve the connection string from the environment.
///
/// `MONGODB_URI` wins when set (local development and tests); otherwise the
/// Atlas URI is assembled from the `DB_USER`/`DB_PASS` credential pair.
pub fn mongodb_uri_from_env() -> String {
    if let Ok(uri) = env::var("MONGODB_URI") {
        return uri;
    }

    let user = env::var("DB_USER").expect("DB_USER must be set");
    let pass = env::var("DB_PASS").expect("DB_PASS must be set");
    let host = env::var("DB_HOST").unwrap_or_else(|_| DEFAULT_CLUSTER_HOST.to_string());

    format!(
        "mongodb+srv://{}:{}@{}/?retryWrites=true&w=majority",
        user, pass, host
    )
}
