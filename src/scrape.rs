// src/scrape.rs
//
// The page loop. One session, pages 1..=N in order, one navigation in flight.
// A navigation timeout means "no more pages": the loop stops and what has
// been collected so far is the result. Any other failure propagates.
// The session is owned here and dropped before returning, on every path.

use std::thread;

use tracing::{debug, info};

use crate::{
    config::options::ScrapeOptions,
    core::browser::Session,
    error::Result,
    progress::Progress,
    specs::{self, PageSpec},
    store::RecordSet,
};

/// Drive `session` across the configured pages and collect matching records.
pub fn run<S: Session>(
    mut session: S,
    spec: &PageSpec,
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RecordSet> {
    let mut collected = RecordSet::new(spec.headers());

    info!(
        pipeline = spec.title,
        pages = opts.page_count,
        country = %opts.country,
        "scrape started"
    );
    if let Some(p) = progress.as_deref_mut() {
        p.begin(opts.page_count);
    }

    for page in 1..=opts.page_count {
        if page > 1 && !opts.pause.is_zero() {
            thread::sleep(opts.pause); // be polite
        }

        let url = spec.page_url(&opts.base_url, page);
        let document = match session.navigate(&url) {
            Ok(doc) => doc,
            Err(e) if e.is_timeout() => {
                info!(page, %url, "navigation timed out; treating as end of listing");
                break;
            }
            Err(e) => {
                if let Some(p) = progress.as_deref_mut() {
                    p.finish();
                }
                return Err(e.into());
            }
        };

        let records = specs::extract(spec, &document, &opts.country);
        debug!(page, bytes = document.len(), matched = records.len(), "page extracted");
        drop(document);

        let matched = records.len();
        for record in records {
            if let Some(p) = progress.as_deref_mut() {
                p.record(collected.headers(), &record);
            }
            collected.push(record);
        }
        if let Some(p) = progress.as_deref_mut() {
            p.page_done(page, matched);
        }
    }

    drop(session);
    info!(pipeline = spec.title, records = collected.len(), "scrape finished");
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    Ok(collected)
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;
    use crate::core::browser::NavigateError;
    use crate::error::ScrapeError;
    use crate::specs::scores;

    #[derive(Default)]
    struct Log {
        urls: RefCell<Vec<String>>,
        closed: Cell<bool>,
    }

    /// One Spanish and one French row per page. `fail_at`: (page, is_timeout).
    struct FakeSession {
        log: Rc<Log>,
        fail_at: Option<(u32, bool)>,
        page: u32,
    }

    impl FakeSession {
        fn new(log: &Rc<Log>, fail_at: Option<(u32, bool)>) -> Self {
            Self { log: Rc::clone(log), fail_at, page: 0 }
        }
    }

    impl Session for FakeSession {
        fn navigate(&mut self, url: &str) -> std::result::Result<String, NavigateError> {
            self.page += 1;
            self.log.urls.borrow_mut().push(s!(url));
            match self.fail_at {
                Some((p, true)) if p == self.page => {
                    return Err(NavigateError::Timeout { url: s!(url) });
                }
                Some((p, false)) if p == self.page => {
                    return Err(NavigateError::Failed { url: s!(url), message: s!("crashed") });
                }
                _ => {}
            }
            Ok(format!(
                r#"<table><tr><td class="rank">{n}</td>
                     <td><div class="location">Spain</div></td></tr>
                   <tr><td class="rank">x</td>
                     <td><div class="location">France</div></td></tr></table>"#,
                n = self.page
            ))
        }
    }

    impl Drop for FakeSession {
        fn drop(&mut self) {
            self.log.closed.set(true);
        }
    }

    fn opts(pages: u32) -> ScrapeOptions {
        ScrapeOptions {
            base_url: s!("https://example.test/list"),
            page_count: pages,
            ..ScrapeOptions::default()
        }
    }

    #[test]
    fn visits_every_page_in_order() {
        let log = Rc::new(Log::default());
        let set = run(FakeSession::new(&log, None), &scores::SPEC, &opts(3), None).unwrap();
        assert_eq!(set.len(), 3);
        let urls = log.urls.borrow();
        assert_eq!(urls.len(), 3);
        assert!(urls[0].starts_with("https://example.test/list?page=1#!/"));
        assert!(urls[2].starts_with("https://example.test/list?page=3#!/"));
        assert!(log.closed.get());
    }

    #[test]
    fn timeout_ends_loop_with_partial_result() {
        let log = Rc::new(Log::default());
        let set = run(FakeSession::new(&log, Some((5, true))), &scores::SPEC, &opts(107), None).unwrap();
        assert_eq!(set.len(), 4);
        let ranks: Vec<_> = set.records().iter().map(|r| r.rank.clone().unwrap()).collect();
        assert_eq!(ranks, vec!["1", "2", "3", "4"]);
        assert_eq!(log.urls.borrow().len(), 5);
        assert!(log.closed.get());
    }

    #[test]
    fn other_failures_propagate_and_still_close() {
        let log = Rc::new(Log::default());
        let err = run(FakeSession::new(&log, Some((2, false))), &scores::SPEC, &opts(10), None).unwrap_err();
        assert!(matches!(err, ScrapeError::Browser(_)));
        assert!(log.closed.get());
    }

    #[test]
    fn zero_pages_yields_empty_set() {
        let log = Rc::new(Log::default());
        let set = run(FakeSession::new(&log, None), &scores::SPEC, &opts(0), None).unwrap();
        assert!(set.is_empty());
        assert_eq!(set.headers().len(), 10);
        assert!(log.urls.borrow().is_empty());
    }

    #[test]
    fn progress_sees_each_record_and_page() {
        #[derive(Default)]
        struct Count {
            begun: u32,
            records: usize,
            pages: Vec<(u32, usize)>,
            finished: bool,
        }
        impl Progress for Count {
            fn begin(&mut self, total: u32) {
                self.begun = total;
            }
            fn record(&mut self, _: &[String], _: &crate::store::Record) {
                self.records += 1;
            }
            fn page_done(&mut self, page: u32, matched: usize) {
                self.pages.push((page, matched));
            }
            fn finish(&mut self) {
                self.finished = true;
            }
        }

        let log = Rc::new(Log::default());
        let mut count = Count::default();
        run(FakeSession::new(&log, None), &scores::SPEC, &opts(2), Some(&mut count)).unwrap();
        assert_eq!(count.begun, 2);
        assert_eq!(count.records, 2);
        assert_eq!(count.pages, vec![(1, 1), (2, 1)]);
        assert!(count.finished);
    }
}
