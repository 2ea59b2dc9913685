use crate::{ListError, ListMsg, PageStep, PageView, PagedListController, RecordSource};

/// Routes a message to the matching controller operation and returns the
/// freshly derived page.
pub fn apply<S: RecordSource>(
    controller: &mut PagedListController<S>,
    msg: ListMsg,
) -> Result<&PageView<S::Record>, ListError<S::Error>> {
    match msg {
        ListMsg::KeywordChanged(keyword) => {
            controller.set_keyword(&keyword).map_err(ListError::Query)
        }
        ListMsg::FilterChanged(filter) => controller
            .set_extra_filter(filter.as_deref())
            .map_err(ListError::Query),
        ListMsg::SearchSubmitted { keyword, filter } => controller
            .set_filter(&keyword, filter.as_deref())
            .map_err(ListError::Query),
        ListMsg::PreviousPage => controller
            .change_page(PageStep::Previous)
            .map_err(ListError::Query),
        ListMsg::NextPage => controller
            .change_page(PageStep::Next)
            .map_err(ListError::Query),
        ListMsg::PageSizeChanged(page_size) => controller.set_page_size(page_size),
        ListMsg::Refresh => controller.refresh().map_err(ListError::Query),
    }
}
