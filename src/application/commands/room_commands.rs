// src/application/commands/room_commands.rs
//
// Room command handlers

use crate::application::console::Console;
use crate::application::display::{room_lines, separator, yes_no};
use crate::application::error_handling::Action;
use crate::application::input::{non_blank, parse_count, parse_price, parse_yes_no};
use crate::application::state::AppState;
use crate::domain::{Room, RoomPatch};
use crate::error::AppResult;

use super::{keep_on_invalid, report, Flow};

/// Admin: add a room
pub fn add_room(state: &AppState, console: &mut dyn Console) -> AppResult<Flow> {
    console.write_line("");
    console.write_line("--- Agregar Nueva Habitación ---");

    let id = read_or_quit!(console, "ID de la habitación: ").trim().to_string();
    if state.room_service.find_room(&id).is_some() {
        console.write_line("");
        console.write_line("Error: Ya existe una habitación con ese ID.");
        return Ok(Flow::Continue);
    }

    let descripcion = read_or_quit!(console, "Descripción: ");

    let raw = read_or_quit!(console, "Número de camas: ");
    let Some(camas) = parse_count(&raw) else {
        console.write_line("Error: El número de camas debe ser un número entero válido.");
        return Ok(Flow::Continue);
    };

    let raw = read_or_quit!(console, "Número de baños: ");
    let Some(banos) = parse_count(&raw) else {
        console.write_line("Error: El número de baños debe ser un número entero válido.");
        return Ok(Flow::Continue);
    };

    let vista = read_or_quit!(console, "Vista (mar/montaña/ciudad): ");
    let balcon = parse_yes_no(&read_or_quit!(console, "¿Tiene balcón? (si/no): ")).unwrap_or(false);

    let raw = read_or_quit!(console, "Precio por noche: ");
    let Some(precio) = parse_price(&raw) else {
        console.write_line("Error: El precio debe ser un número válido.");
        return Ok(Flow::Continue);
    };

    let disponible = parse_yes_no(&read_or_quit!(console, "¿Disponible? (si/no): ")).unwrap_or(false);
    let lugar_turistico = read_or_quit!(console, "Lugar turístico cercano: ");

    let room = Room {
        id,
        descripcion: descripcion.trim().to_string(),
        camas,
        banos,
        vista: vista.trim().to_string(),
        balcon,
        precio,
        disponible,
        lugar_turistico: lugar_turistico.trim().to_string(),
    };

    report(console, Action::AddRoom, state.room_service.add_room(room));
    Ok(Flow::Continue)
}

/// Admin: list every room
pub fn show_all_rooms(state: &AppState, console: &mut dyn Console) -> AppResult<Flow> {
    console.write_line("");
    console.write_line("--- Listado de Habitaciones ---");

    let rooms = state.room_service.list_rooms();
    if rooms.is_empty() {
        console.write_line("No hay habitaciones registradas.");
    }
    for room in &rooms {
        console.write_line("");
        for line in room_lines(room, true) {
            console.write_line(&line);
        }
        console.write_line(&separator());
    }
    Ok(Flow::Continue)
}

/// Client: list available rooms
pub fn show_available_rooms(state: &AppState, console: &mut dyn Console) -> AppResult<Flow> {
    console.write_line("");
    console.write_line("--- Habitaciones Disponibles ---");

    let rooms = state.room_service.list_available_rooms();
    if rooms.is_empty() {
        console.write_line("No hay habitaciones disponibles en este momento.");
    }
    for room in &rooms {
        console.write_line("");
        for line in room_lines(room, false) {
            console.write_line(&line);
        }
        console.write_line(&separator());
    }
    Ok(Flow::Continue)
}

/// Both roles: look a room up by id
pub fn search_room(state: &AppState, console: &mut dyn Console) -> AppResult<Flow> {
    console.write_line("");
    console.write_line("--- Buscar Habitación por ID ---");

    let id = read_or_quit!(console, "Ingrese el ID de la habitación: ");

    match state.room_service.find_room(id.trim()) {
        Some(room) => {
            console.write_line("");
            console.write_line("--- Habitación Encontrada ---");
            for line in room_lines(&room, true) {
                console.write_line(&line);
            }
            if !room.disponible {
                console.write_line("");
                console.write_line("Esta habitación no está disponible actualmente.");
            }
        }
        None => {
            console.write_line("");
            console.write_line("No se encontró ninguna habitación con ese ID.");
        }
    }
    Ok(Flow::Continue)
}

/// Admin: field by field update, blank keeps the current value
pub fn update_room(state: &AppState, console: &mut dyn Console) -> AppResult<Flow> {
    console.write_line("");
    console.write_line("--- Actualizar Habitación ---");

    let id = read_or_quit!(console, "Ingrese el ID de la habitación a actualizar: ");
    let Some(room) = state.room_service.find_room(id.trim()) else {
        console.write_line("");
        console.write_line("No se encontró ninguna habitación con ese ID.");
        return Ok(Flow::Continue);
    };

    console.write_line("");
    console.write_line("Deje en blanco los campos que no desea modificar.");

    let mut patch = RoomPatch::default();

    let raw = read_or_quit!(console, format!("Nueva descripción [{}]: ", room.descripcion));
    patch.descripcion = non_blank(&raw);

    let raw = read_or_quit!(console, format!("Nuevo número de camas [{}]: ", room.camas));
    patch.camas = keep_on_invalid(console, &raw, parse_count, "camas");

    let raw = read_or_quit!(console, format!("Nuevo número de baños [{}]: ", room.banos));
    patch.banos = keep_on_invalid(console, &raw, parse_count, "baños");

    let raw = read_or_quit!(console, format!("Nueva vista [{}]: ", room.vista));
    patch.vista = non_blank(&raw);

    let raw = read_or_quit!(console, format!("¿Tiene balcón? [{}]: ", yes_no(room.balcon)));
    patch.balcon = keep_on_invalid(console, &raw, parse_yes_no, "balcón");

    let raw = read_or_quit!(console, format!("Nuevo precio [{}]: ", room.precio));
    patch.precio = keep_on_invalid(console, &raw, parse_price, "precio");

    let raw = read_or_quit!(console, format!("¿Disponible? [{}]: ", yes_no(room.disponible)));
    patch.disponible = keep_on_invalid(console, &raw, parse_yes_no, "disponible");

    let raw = read_or_quit!(console, format!("Nuevo Lugar Turístico [{}]: ", room.lugar_turistico));
    patch.lugar_turistico = non_blank(&raw);

    if patch.is_empty() {
        console.write_line("");
        console.write_line("No se realizaron cambios.");
        return Ok(Flow::Continue);
    }

    report(console, Action::UpdateRoom, state.room_service.update_room(&room.id, patch));
    Ok(Flow::Continue)
}

/// Admin: delete by id
pub fn delete_room(state: &AppState, console: &mut dyn Console) -> AppResult<Flow> {
    console.write_line("");
    console.write_line("--- Eliminar Habitación ---");

    let id = read_or_quit!(console, "Ingrese el ID de la habitación a eliminar: ");
    let outcome = state.room_service.delete_room(id.trim());

    report(console, Action::DeleteRoom, Ok(outcome));
    Ok(Flow::Continue)
}
