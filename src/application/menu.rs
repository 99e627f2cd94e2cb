// src/application/menu.rs
//
// Role-based console menus
//
// The role picked at the main menu only selects which menu is shown.
// Nothing is authenticated.

use crate::application::commands::{self, Flow};
use crate::application::console::Console;
use crate::application::state::AppState;
use crate::error::AppResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Administrator,
    Client,
}

type Handler = fn(&AppState, &mut dyn Console) -> AppResult<Flow>;

/// Main loop. Returns when the user picks "Salir" or the input closes.
pub fn run(state: &AppState, console: &mut dyn Console) -> AppResult<()> {
    loop {
        console.write_line("");
        console.write_line("===== SISTEMA DE GESTIÓN HOTELERA =====");
        console.write_line("1. Administrador");
        console.write_line("2. Cliente");
        console.write_line("3. Salir");

        let Some(choice) = console.read_line("Seleccione una opción: ")? else {
            break;
        };

        let role = match choice.trim() {
            "1" => Role::Administrator,
            "2" => Role::Client,
            "3" => {
                console.write_line("¡Hasta luego!");
                break;
            }
            _ => {
                console.write_line("Opción inválida. Intente nuevamente.");
                continue;
            }
        };

        log::info!("Session role: {:?}", role);
        let flow = match role {
            Role::Administrator => admin_menu(state, console)?,
            Role::Client => client_menu(state, console)?,
        };
        if flow == Flow::Quit {
            break;
        }
    }

    log::debug!("Menu loop finished");
    Ok(())
}

fn admin_menu(state: &AppState, console: &mut dyn Console) -> AppResult<Flow> {
    loop {
        console.write_line("");
        console.write_line("===== MENÚ ADMINISTRADOR =====");
        console.write_line("1. Agregar habitación");
        console.write_line("2. Mostrar todas las habitaciones");
        console.write_line("3. Buscar habitación por ID");
        console.write_line("4. Actualizar habitación");
        console.write_line("5. Eliminar habitación");
        console.write_line("6. Gestionar servicios");
        console.write_line("7. Volver al menú principal");

        let Some(choice) = console.read_line("Seleccione una opción: ")? else {
            return Ok(Flow::Quit);
        };

        let handler: Handler = match choice.trim() {
            "1" => commands::add_room,
            "2" => commands::show_all_rooms,
            "3" => commands::search_room,
            "4" => commands::update_room,
            "5" => commands::delete_room,
            "6" => services_menu,
            "7" => return Ok(Flow::Continue),
            _ => {
                console.write_line("Opción inválida. Intente nuevamente.");
                continue;
            }
        };

        if handler(state, console)? == Flow::Quit {
            return Ok(Flow::Quit);
        }
    }
}

fn services_menu(state: &AppState, console: &mut dyn Console) -> AppResult<Flow> {
    loop {
        console.write_line("");
        console.write_line("===== GESTIÓN DE SERVICIOS =====");
        console.write_line("1. Agregar servicio");
        console.write_line("2. Mostrar servicios");
        console.write_line("3. Actualizar servicio");
        console.write_line("4. Eliminar servicio");
        console.write_line("5. Volver");

        let Some(choice) = console.read_line("Seleccione una opción: ")? else {
            return Ok(Flow::Quit);
        };

        let handler: Handler = match choice.trim() {
            "1" => commands::add_service,
            "2" => commands::show_all_services,
            "3" => commands::edit_service,
            "4" => commands::delete_service,
            "5" => return Ok(Flow::Continue),
            _ => {
                console.write_line("Opción inválida. Intente nuevamente.");
                continue;
            }
        };

        if handler(state, console)? == Flow::Quit {
            return Ok(Flow::Quit);
        }
    }
}

fn client_menu(state: &AppState, console: &mut dyn Console) -> AppResult<Flow> {
    loop {
        console.write_line("");
        console.write_line("===== MENÚ CLIENTE =====");
        console.write_line("1. Ver habitaciones disponibles");
        console.write_line("2. Buscar habitación por ID");
        console.write_line("3. Volver al menú principal");

        let Some(choice) = console.read_line("Seleccione una opción: ")? else {
            return Ok(Flow::Quit);
        };

        let handler: Handler = match choice.trim() {
            "1" => commands::show_available_rooms,
            "2" => commands::search_room,
            "3" => return Ok(Flow::Continue),
            _ => {
                console.write_line("Opción inválida. Intente nuevamente.");
                continue;
            }
        };

        if handler(state, console)? == Flow::Quit {
            return Ok(Flow::Quit);
        }
    }
}
