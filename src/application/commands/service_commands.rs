// src/application/commands/service_commands.rs
//
// Service catalog command handlers (admin only)

use crate::application::console::Console;
use crate::application::display::{separator, service_lines};
use crate::application::error_handling::Action;
use crate::application::input::{non_blank, parse_price, parse_service_id};
use crate::application::state::AppState;
use crate::domain::ServicePatch;
use crate::error::AppResult;

use super::{keep_on_invalid, report, Flow};

pub fn add_service(state: &AppState, console: &mut dyn Console) -> AppResult<Flow> {
    console.write_line("");
    console.write_line("--- Agregar Servicio ---");

    let nombre = read_or_quit!(console, "Nombre del servicio: ");

    let raw = read_or_quit!(console, "Precio del servicio: ");
    let Some(precio) = parse_price(&raw) else {
        console.write_line("Error: El precio debe ser un número válido.");
        return Ok(Flow::Continue);
    };

    report(
        console,
        Action::AddService,
        state.service_catalog.register(nombre.trim(), precio),
    );
    Ok(Flow::Continue)
}

pub fn show_all_services(state: &AppState, console: &mut dyn Console) -> AppResult<Flow> {
    console.write_line("");
    console.write_line("--- Listado de Servicios ---");

    let services = state.service_catalog.list();
    if services.is_empty() {
        console.write_line("No hay servicios registrados.");
    }
    for service in &services {
        console.write_line("");
        for line in service_lines(service) {
            console.write_line(&line);
        }
        console.write_line(&separator());
    }
    Ok(Flow::Continue)
}

pub fn edit_service(state: &AppState, console: &mut dyn Console) -> AppResult<Flow> {
    console.write_line("");
    console.write_line("--- Actualizar Servicio ---");

    let raw = read_or_quit!(console, "Ingrese el ID del servicio a actualizar: ");
    let Some(id) = parse_service_id(&raw) else {
        console.write_line("Error: El ID del servicio debe ser un número entero.");
        return Ok(Flow::Continue);
    };
    let Some(service) = state.service_catalog.find(id) else {
        console.write_line("");
        console.write_line("No se encontró ningún servicio con ese ID.");
        return Ok(Flow::Continue);
    };

    console.write_line("");
    console.write_line("Deje en blanco los campos que no desea modificar.");

    let raw = read_or_quit!(console, format!("Nuevo nombre [{}]: ", service.nombre));
    let nombre = non_blank(&raw);

    let raw = read_or_quit!(console, format!("Nuevo precio [{}]: ", service.precio));
    let precio = keep_on_invalid(console, &raw, parse_price, "precio");

    let patch = ServicePatch { nombre, precio };
    if patch == ServicePatch::default() {
        console.write_line("");
        console.write_line("No se realizaron cambios.");
        return Ok(Flow::Continue);
    }

    report(
        console,
        Action::EditService,
        state.service_catalog.edit(service.id, patch),
    );
    Ok(Flow::Continue)
}

pub fn delete_service(state: &AppState, console: &mut dyn Console) -> AppResult<Flow> {
    console.write_line("");
    console.write_line("--- Eliminar Servicio ---");

    let raw = read_or_quit!(console, "Ingrese el ID del servicio a eliminar: ");
    let Some(id) = parse_service_id(&raw) else {
        console.write_line("Error: El ID del servicio debe ser un número entero.");
        return Ok(Flow::Continue);
    };

    let outcome = state.service_catalog.remove(id);
    report(console, Action::DeleteService, Ok(outcome));
    Ok(Flow::Continue)
}
