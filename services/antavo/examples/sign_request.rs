use anyhow::Result;
use antsign_antavo::{
    Config, Credential, DefaultCredentialProvider, RequestSigner, StaticCredentialProvider,
};
use antsign_core::{Context, OsEnv, ProvideCredential, Signer};

#[tokio::main]
async fn main() -> Result<()> {
    // Read ANTAVO_* from .env if present.
    let _ = dotenv::dotenv();
    let _ = env_logger::builder().try_init();

    let ctx = Context::new().with_env(OsEnv);

    let config = Config::new().from_env(&ctx);
    let region = config.region.clone().unwrap_or_else(|| "st2".to_string());
    let builder = RequestSigner::from_config(&config.with_region(region))?;

    let loader = DefaultCredentialProvider::new();
    let signer = if loader.provide_credential(&ctx).await?.is_none() {
        println!("No Antavo credentials found, using demo credentials for example");
        Signer::new(
            ctx,
            StaticCredentialProvider::new("demo_access_key", "demo_api_secret"),
            builder,
        )
    } else {
        Signer::new(ctx, loader, builder)
    };

    println!("Example 1: Fetch customer activities");
    let (mut parts, _body) = http::Request::get(
        "https://api.example.com/customers/123/activities/spend",
    )
    .body(())?
    .into_parts();

    match signer.sign(&mut parts).await {
        Ok(_) => {
            for name in ["authorization", "content-type", "host", "date"] {
                println!("{name}: {:?}", parts.headers.get(name));
            }
        }
        Err(e) => eprintln!("Failed to sign request: {e}"),
    }

    println!("\nExample 2: Track an event with a signed body");
    let body = br#"{"customer":"123","action":"spend"}"#;
    let cred = Credential::new("demo_access_key", "demo_api_secret");
    let (mut parts, _body) = http::Request::post("https://api.example.com/events")
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(())?
        .into_parts();

    RequestSigner::new("api", "st2").sign_parts(&mut parts, &cred, body)?;
    println!("authorization: {:?}", parts.headers.get("authorization"));

    Ok(())
}
