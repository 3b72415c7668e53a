// ============================================================================
// RESULTADOS VIEW - Panel de resultados de búsqueda
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};

use crate::dom::{
    append_child, clear_children, get_element_by_id, on_click, set_display, set_text_content,
    ElementBuilder,
};
use crate::viewmodels::{InsumosViewModel, ResultadoItem, ResultadosVista};
use crate::views::notice::show_notice;

/// Pintar los resultados de búsqueda en el panel del host.
/// Con la consulta por debajo del mínimo el panel se oculta entero.
pub fn render_resultados(
    vm: &Rc<InsumosViewModel>,
    vista: &ResultadosVista,
) -> Result<(), JsValue> {
    let panel = get_element_by_id("resultadosBusqueda")
        .ok_or_else(|| JsValue::from_str("No #resultadosBusqueda element found"))?;
    let lista = get_element_by_id("listaInsumos")
        .ok_or_else(|| JsValue::from_str("No #listaInsumos element found"))?;

    if !vista.visible {
        clear_children(&lista);
        set_display(&panel, "none")?;
        return Ok(());
    }

    if let Some(count) = get_element_by_id("countResultados") {
        set_text_content(&count, &format!("({})", vista.total));
    }

    clear_children(&lista);
    if vista.vacia {
        let sin_resultados = ElementBuilder::new("div")?
            .class("list-group-item text-muted")
            .text("No se encontraron insumos")
            .build();
        append_child(&lista, &sin_resultados)?;
    } else {
        for item in &vista.items {
            let card = render_resultado_card(vm, item)?;
            append_child(&lista, &card)?;
        }
    }

    set_display(&panel, "block")?;
    Ok(())
}

fn render_resultado_card(
    vm: &Rc<InsumosViewModel>,
    item: &ResultadoItem,
) -> Result<Element, JsValue> {
    let card_class = if item.ya_seleccionado {
        "card h-100 shadow-sm border-success"
    } else {
        "card h-100 shadow-sm"
    };

    let titulo = match &item.codigo {
        Some(codigo) => format!("{} - {}", codigo, item.nombre),
        None => item.nombre.clone(),
    };
    let stock = match &item.unidad {
        Some(unidad) => format!("Stock: {} {}", item.stock_actual, unidad),
        None => format!("Stock: {}", item.stock_actual),
    };

    let controles = ElementBuilder::new("div")?.class("mt-2").build();
    if item.ya_seleccionado {
        let badge = ElementBuilder::new("span")?
            .class("badge bg-success")
            .text("✓ Seleccionado")
            .build();
        append_child(&controles, &badge)?;
    } else {
        let input = ElementBuilder::new("input")?
            .class("form-control form-control-sm mt-1")
            .id(&format!("cant_{}", item.id))?
            .attr("type", "number")?
            .attr("value", "1")?
            .attr("min", "1")?
            .attr("max", &item.stock_actual.to_string())?
            .build();

        let boton = ElementBuilder::new("button")?
            .class("btn btn-sm btn-success w-100 mt-1")
            .attr("type", "button")?
            .text("➕ Agregar")
            .build();

        let vm = vm.clone();
        let id = item.id;
        on_click(&boton, move || agregar_desde_resultados(&vm, id))?;

        append_child(&controles, &input)?;
        append_child(&controles, &boton)?;
    }

    let body = ElementBuilder::new("div")?
        .class("card-body p-3")
        .child(ElementBuilder::new("h6")?.text(&titulo).build())?
        .child(
            ElementBuilder::new("small")?
                .class("text-muted")
                .text(&stock)
                .build(),
        )?
        .child(controles)?
        .build();

    let card = ElementBuilder::new("div")?.class(card_class).child(body)?.build();
    Ok(ElementBuilder::new("div")?
        .class("col-md-6 mb-2")
        .child(card)?
        .build())
}

/// Leer la cantidad tipeada y delegar el agregado. Un valor no numérico
/// baja a 0 y lo rechaza la validación de la lista.
fn agregar_desde_resultados(vm: &Rc<InsumosViewModel>, id: u32) {
    let cantidad = get_element_by_id(&format!("cant_{}", id))
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .and_then(|valor| valor.trim().parse::<u32>().ok())
        .unwrap_or(0);

    match vm.add_insumo(id, cantidad) {
        Ok(()) => {
            // Igual que siempre: agregar limpia la búsqueda y cierra el panel
            if let Some(buscar) = get_element_by_id("buscarInsumo")
                .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            {
                buscar.set_value("");
            }
            if let Some(panel) = get_element_by_id("resultadosBusqueda") {
                let _ = set_display(&panel, "none");
            }
        }
        Err(e) => show_notice(&e.to_string(), vm.config().notice_timeout_ms),
    }
}
