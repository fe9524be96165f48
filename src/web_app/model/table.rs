// web_app/model/table.rs - Column layout and body state for the admin tables

/// A header cell: label plus its Tailwind classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnSpec {
    pub label: &'static str,
    pub class: &'static str,
}

const fn column(label: &'static str, class: &'static str) -> ColumnSpec {
    ColumnSpec { label, class }
}

const HEAD: &str = "h-10 px-2 text-left align-middle font-medium text-muted-foreground";

/// Orders table columns; date, total and payment collapse on small screens.
pub const ORDER_COLUMNS: [ColumnSpec; 7] = [
    column("Pedido", HEAD),
    column("Data", "h-10 px-2 text-left align-middle font-medium hidden md:table-cell"),
    column("Cliente", HEAD),
    column("Total", "h-10 px-2 text-right align-middle font-medium hidden md:table-cell"),
    column("Pagamento", "h-10 px-2 text-left align-middle font-medium hidden md:table-cell"),
    column("Status", HEAD),
    column("Ações", "h-10 px-2 text-center align-middle font-medium w-[60px]"),
];

pub const PRODUCT_COLUMNS: [ColumnSpec; 4] = [
    column("Nome", HEAD),
    column("Preço", "h-10 px-2 text-right align-middle font-medium"),
    column("Status", "h-10 px-2 text-center align-middle font-medium w-[120px]"),
    column("Ações", "h-10 px-2 text-right align-middle font-medium w-[100px]"),
];

/// Messages for the single full-width row shown instead of data.
pub const NO_ORDERS_MESSAGE: &str = "Nenhum pedido encontrado com os filtros atuais.";
pub const LOADING_PRODUCTS_MESSAGE: &str = "Carregando produtos...";
pub const NO_PRODUCTS_MESSAGE: &str = "Nenhum produto encontrado.";

/// What a table body shows. Loading wins over empty, empty wins over rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableBody {
    Loading,
    Empty,
    Rows,
}

impl TableBody {
    pub fn resolve(loading: bool, item_count: usize) -> Self {
        if loading {
            TableBody::Loading
        } else if item_count == 0 {
            TableBody::Empty
        } else {
            TableBody::Rows
        }
    }
}
