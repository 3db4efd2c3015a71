use crate::{config::Credentials, error, prompt, success, warning};

// client ids and secrets from the developer dashboard are 32 hex chars
const CREDENTIAL_LEN: usize = 32;

fn prompt_credential(msg: &str) -> String {
    loop {
        let value = prompt::prompt_line(msg);
        if value.len() == CREDENTIAL_LEN && value.chars().all(|c| c.is_ascii_alphanumeric()) {
            return value;
        }
        warning!(
            "A credential must be {} alphanumeric characters.",
            CREDENTIAL_LEN
        );
    }
}

pub async fn generate_config() {
    let config_file = crate::config::config_file();
    if config_file.exists() {
        let proceed = prompt::prompt_confirm(
            "A config file already exists. Do you want to overwrite its contents?",
        );
        if !proceed {
            println!("Configuration creation canceled.");
            return;
        }
    }

    let credentials = Credentials {
        client_id: prompt_credential("Provide the Spotify client ID from the developer dashboard"),
        client_secret: prompt_credential(
            "Provide the Spotify client secret from the developer dashboard",
        ),
        redirect_uri: prompt::prompt_line(
            "Provide the redirect URI you specified in the Spotify app",
        ),
        user_id: prompt::prompt_line("Provide the Spotify user ID"),
    };

    if let Err(e) = credentials.persist().await {
        error!("Failed to write the config file: {}", e);
    }
    success!("Config file created successfully!");
}
