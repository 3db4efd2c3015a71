use crate::{config::Credentials, error, spotify};

pub async fn auth() {
    let credentials = match Credentials::load() {
        Ok(credentials) => credentials,
        Err(_) => error!("Authorization failed. Try running 'spoticli cfg'."),
    };
    spotify::auth::auth(credentials).await;
}
