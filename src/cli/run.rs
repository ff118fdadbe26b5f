use std::time::Duration;

use tracing::{debug, info};

use super::{display_contact, form_from_fields, listing_row, patch_from_fields};
use crate::prelude::{
    AppError, ContactManager, FormData, LatencySimulator, StorageMediums, actions,
    command::{Cli, Commands},
    parse_store,
};

pub fn build_manager(cli: &Cli) -> Result<ContactManager, AppError> {
    let medium = StorageMediums::from(&cli.storage)?;
    let storage = parse_store(medium, &cli.path);
    let latency = LatencySimulator::new(Duration::from_millis(cli.max_latency_ms));

    debug!(
        medium = medium.is_which(),
        path = %cli.path,
        max_latency_ms = cli.max_latency_ms,
        "opened contact store"
    );
    Ok(ContactManager::new(storage, latency))
}

pub async fn run_app(cli: Cli) -> Result<(), AppError> {
    let manager = build_manager(&cli)?;

    match cli.command {
        Commands::List { query } => {
            let view = actions::root_loader(&manager, query.as_deref()).await?;

            if view.contacts.is_empty() {
                match view.query {
                    Some(query) => println!("Found no contact matching {{{}}}", query),
                    None => println!("No contact yet"),
                }
                return Ok(());
            }

            for (i, contact) in view.contacts.iter().enumerate() {
                println!("{}", listing_row(i + 1, contact));
            }
            Ok(())
        }

        Commands::Show { id } => {
            let contact = actions::contact_loader(&manager, &id).await?;
            println!("{}", display_contact(&contact));
            Ok(())
        }

        Commands::Create { fields } => {
            let patch = patch_from_fields(fields)?;
            let (mut contact, edit_path) = actions::root_action(&manager).await?;

            if !patch.is_empty() {
                contact = manager.update(&contact.id, patch).await?;
            }

            info!(id = %contact.id, edit_path = %edit_path, "contact created");
            println!("Contact created successfully: {}", contact.id);
            println!("{}", display_contact(&contact));
            Ok(())
        }

        Commands::Edit { id, fields } => {
            let form = form_from_fields(fields)?;
            if form.is_empty() {
                return Err(AppError::Validation(
                    "Nothing to update, provide at least one field. See help".to_string(),
                ));
            }

            let detail_path = actions::edit_action(&manager, &id, &form).await?;
            info!(id = %id, detail_path = %detail_path, "contact edited");
            let contact = actions::contact_loader(&manager, &id).await?;

            println!("Contact updated successfully");
            println!("{}", display_contact(&contact));
            Ok(())
        }

        Commands::Favorite { id, value } => {
            let form: FormData = [("favorite", value)].into_iter().collect();
            let contact = actions::favorite_action(&manager, &id, &form).await?;

            if contact.is_favorite() {
                println!("Added to favorites");
            } else {
                println!("Removed from favorites");
            }
            Ok(())
        }

        Commands::Delete { id } => {
            if actions::destroy_action(&manager, &id).await? {
                println!("Contact deleted successfully");
            } else {
                eprintln!("{}", AppError::NotFound(id));
            }
            Ok(())
        }
    }
}
