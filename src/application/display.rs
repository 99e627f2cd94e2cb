// src/application/display.rs
//
// Text rendering of records for the menus

use crate::domain::{Room, Service};

const SEPARATOR_WIDTH: usize = 40;

pub fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Sí"
    } else {
        "No"
    }
}

pub fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// Full room card. `show_availability` is off in the client's available list,
/// where every room shown is available anyway.
pub fn room_lines(room: &Room, show_availability: bool) -> Vec<String> {
    let mut lines = vec![
        format!("ID: {}", room.id),
        format!("Descripción: {}", room.descripcion),
        format!("Camas: {} - Baños: {}", room.camas, room.banos),
        format!("Vista: {} - Balcón: {}", room.vista, yes_no(room.balcon)),
        format!("Precio: ${:.2} por noche", room.precio),
    ];
    if show_availability {
        lines.push(format!("Disponible: {}", yes_no(room.disponible)));
    }
    lines.push(format!("Lugar Turístico: {}", room.lugar_turistico));
    lines
}

pub fn service_lines(service: &Service) -> Vec<String> {
    vec![
        format!("ID: {}", service.id),
        format!("Nombre: {}", service.nombre),
        format!("Precio: ${:.2}", service.precio),
    ]
}
