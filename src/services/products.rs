//! Read-only products listing.

use crate::dto::products::{ProductsPageData, render_products};
use crate::repository::ProductReader;
use crate::services::ServiceResult;

pub fn load_products<R>(repo: &R) -> ServiceResult<ProductsPageData>
where
    R: ProductReader + ?Sized,
{
    let products = repo.list_products().map_err(|err| {
        log::error!("Failed to load products: {err}");
        err
    })?;

    Ok(render_products(&products))
}
