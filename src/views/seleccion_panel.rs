// ============================================================================
// SELECCION PANEL VIEW - Previsualización de la selección actual
// ============================================================================
// Se redibuja entero en cada notificación del estado; el panel es chico y
// no amerita actualizaciones incrementales.
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{
    append_child, clear_children, get_element_by_id, on_change, on_click, set_text_content,
    toggle_class, ElementBuilder,
};
use crate::viewmodels::{FilaSeleccion, InsumosViewModel, SeleccionVista};
use crate::views::notice::show_notice;

pub fn render_seleccion(
    vm: &Rc<InsumosViewModel>,
    vista: &SeleccionVista,
) -> Result<(), JsValue> {
    let lista = get_element_by_id("listaSeleccionados")
        .ok_or_else(|| JsValue::from_str("No #listaSeleccionados element found"))?;

    clear_children(&lista);
    for fila in &vista.filas {
        let elemento = render_fila(vm, fila)?;
        append_child(&lista, &elemento)?;
    }

    // Contadores del host (opcionales según la plantilla)
    if let Some(total) = get_element_by_id("totalItems") {
        set_text_content(&total, &format!("({})", vista.total_items));
    }
    if let Some(total) = get_element_by_id("totalSeleccionados") {
        set_text_content(&total, &vista.total_items.to_string());
    }

    if let Some(boton) = get_element_by_id("btnSolicitarTodos") {
        toggle_class(&boton, "d-none", !vista.puede_solicitar)?;
    }

    if let Some(aviso) = get_element_by_id("stockWarning") {
        if vista.stock_ok {
            set_text_content(&aviso, "");
        } else {
            set_text_content(&aviso, "⚠️ Stock insuficiente");
        }
    }

    Ok(())
}

fn render_fila(vm: &Rc<InsumosViewModel>, fila: &FilaSeleccion) -> Result<Element, JsValue> {
    let nombre = match &fila.codigo {
        Some(codigo) => format!("{} - {}", codigo, fila.nombre),
        None => fila.nombre.clone(),
    };

    let badge_class = if fila.excede_stock {
        "badge bg-danger ms-2"
    } else {
        "badge bg-success ms-2"
    };
    let restante = match &fila.unidad {
        Some(unidad) => format!("{} {}", fila.stock_restante, unidad),
        None => fila.stock_restante.to_string(),
    };

    let input = ElementBuilder::new("input")?
        .class("form-control form-control-sm")
        .attr("type", "number")?
        .attr("value", &fila.cantidad.to_string())?
        .attr("min", "1")?
        .attr("max", &fila.stock_actual.to_string())?
        .build();

    {
        let vm = vm.clone();
        let id = fila.id;
        on_change(&input, move |valor| {
            let cantidad = valor.trim().parse::<u32>().unwrap_or(0);
            if let Err(e) = vm.update_cantidad(id, cantidad) {
                show_notice(&e.to_string(), vm.config().notice_timeout_ms);
                // Volver a pintar para restaurar la cantidad vigente
                vm.notify();
            }
        })?;
    }

    let quitar = ElementBuilder::new("button")?
        .class("btn btn-sm btn-outline-danger")
        .attr("type", "button")?
        .text("🗑️")
        .build();

    {
        let vm = vm.clone();
        let id = fila.id;
        on_click(&quitar, move || vm.remove_insumo(id))?;
    }

    let detalle = ElementBuilder::new("div")?
        .class("d-flex align-items-center mt-1")
        .child(input)?
        .child(
            ElementBuilder::new("span")?
                .class(badge_class)
                .text(&restante)
                .build(),
        )?
        .build();

    let info = ElementBuilder::new("div")?
        .child(ElementBuilder::new("small")?.text(&nombre).build())?
        .child(detalle)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("d-flex justify-content-between align-items-center mb-2 p-2 bg-light rounded")
        .child(info)?
        .child(quitar)?
        .build())
}
