use crate::model::api::{IndexQueryDto, PageMetaDto, PaginatedDto};

pub const DEFAULT_PER_PAGE: u64 = 10;
pub const MAX_PER_PAGE: u64 = 100;

/// Normalized paging request, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub per_page: u64,
}

impl PageRequest {
    pub fn from_query(query: &IndexQueryDto) -> Self {
        Self {
            page: query.page.unwrap_or(1).max(1),
            per_page: query
                .limit
                .unwrap_or(DEFAULT_PER_PAGE)
                .clamp(1, MAX_PER_PAGE),
        }
    }

    /// Zero-based page index as expected by SeaORM's paginator.
    pub fn index(&self) -> u64 {
        self.page - 1
    }
}

/// One page of rows plus the total count of matching rows.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub request: PageRequest,
}

impl<T> Page<T> {
    pub fn last_page(&self) -> u64 {
        self.total.div_ceil(self.request.per_page).max(1)
    }

    pub fn meta(&self) -> PageMetaDto {
        PageMetaDto {
            total: self.total,
            per_page: self.request.per_page,
            current_page: self.request.page,
            last_page: self.last_page(),
            first_page: 1,
        }
    }

    pub fn into_dto<U>(self, data: Vec<U>) -> PaginatedDto<U> {
        PaginatedDto {
            meta: self.meta(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_page_request() {
        let request = PageRequest::from_query(&IndexQueryDto {
            page: Some(0),
            limit: Some(500),
            employee_id: None,
        });

        assert_eq!(request.page, 1);
        assert_eq!(request.per_page, MAX_PER_PAGE);
        assert_eq!(request.index(), 0);
    }

    #[test]
    fn computes_last_page() {
        let request = PageRequest { page: 2, per_page: 10 };

        let page: Page<()> = Page { items: vec![], total: 21, request };
        assert_eq!(page.last_page(), 3);

        let empty: Page<()> = Page { items: vec![], total: 0, request };
        assert_eq!(empty.meta().last_page, 1);
        assert_eq!(empty.meta().current_page, 2);
    }
}
