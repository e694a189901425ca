//! Integration test: drive the wizard through full user flows.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::cast_possible_truncation)]

use std::cell::RefCell;
use std::rc::Rc;

use threadline_core::{
    Dimensions, DisplayLocator, ImageInfo, IntakeSource, LocatorFactory, Side, SourceFile, Step,
    TemplateCatalog, UploadedFile, Wizard, WizardError, accept, first_offered,
};

/// Shared log of created and released locator hrefs.
#[derive(Default)]
struct Ledger {
    created: RefCell<u32>,
    released: RefCell<Vec<String>>,
}

struct LedgerHref {
    href: String,
    ledger: Rc<Ledger>,
}

impl DisplayLocator for LedgerHref {
    fn href(&self) -> &str {
        &self.href
    }
}

impl Drop for LedgerHref {
    fn drop(&mut self) {
        self.ledger.released.borrow_mut().push(self.href.clone());
    }
}

struct LedgerFactory(Rc<Ledger>);

impl LocatorFactory for LedgerFactory {
    type Locator = LedgerHref;
    type Error = std::convert::Infallible;

    fn create(&self, file: &SourceFile, _info: &ImageInfo) -> Result<LedgerHref, Self::Error> {
        let n = {
            let mut created = self.0.created.borrow_mut();
            *created += 1;
            *created
        };
        Ok(LedgerHref {
            href: format!("blob:{n}:{}", file.name()),
            ledger: Rc::clone(&self.0),
        })
    }
}

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_fn(width, height, |x, y| {
        image::Rgba([(x % 256) as u8, (y % 256) as u8, 0, 255])
    });
    let mut buf = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new(&mut buf);
    image::ImageEncoder::write_image(
        encoder,
        img.as_raw(),
        img.width(),
        img.height(),
        image::ExtendedColorType::Rgba8,
    )
    .expect("encode test PNG");
    buf
}

fn receive(
    factory: &LedgerFactory,
    wizard: &mut Wizard<LedgerHref>,
    side: Side,
    name: &str,
) -> Option<UploadedFile<LedgerHref>> {
    let upload = accept(factory, SourceFile::new(name, png_bytes(8, 6))).unwrap();
    wizard.set_upload(side, upload)
}

#[test]
fn selecting_front_leaves_back_untouched_and_vice_versa() {
    let factory = LedgerFactory(Rc::default());
    let mut wizard = Wizard::new();

    let _ = receive(&factory, &mut wizard, Side::Front, "front.png");
    assert_eq!(
        wizard.upload(Side::Front).map(|u| u.file().name()),
        Some("front.png")
    );
    assert!(wizard.upload(Side::Back).is_none());

    let _ = receive(&factory, &mut wizard, Side::Back, "back.png");
    assert_eq!(
        wizard.upload(Side::Front).map(|u| u.file().name()),
        Some("front.png")
    );
    assert_eq!(
        wizard.upload(Side::Back).map(|u| u.file().name()),
        Some("back.png")
    );
}

#[test]
fn upload_step_forward_enabled_once_either_side_present() {
    for side in Side::ALL {
        let factory = LedgerFactory(Rc::default());
        let mut wizard = Wizard::new();
        assert!(!wizard.can_advance(), "empty wizard must not advance");
        let _ = receive(&factory, &mut wizard, side, "only.png");
        assert!(wizard.can_advance(), "{side} upload alone should enable Next");
    }
}

#[test]
fn template_step_forward_enabled_by_any_template() {
    let catalog = TemplateCatalog::default();
    for template in &catalog {
        let factory = LedgerFactory(Rc::default());
        let mut wizard = Wizard::new();
        let _ = receive(&factory, &mut wizard, Side::Front, "front.png");
        assert_eq!(wizard.advance(), Ok(Step::Template));
        assert!(!wizard.can_advance());

        wizard.select_template(template);
        assert!(wizard.can_advance(), "{} should enable Next", template.id);
        assert_eq!(wizard.advance(), Ok(Step::Results));
    }
}

#[test]
fn going_back_preserves_uploads() {
    let factory = LedgerFactory(Rc::default());
    let mut wizard = Wizard::new();
    let _ = receive(&factory, &mut wizard, Side::Front, "front.png");
    let _ = receive(&factory, &mut wizard, Side::Back, "back.png");
    let front_href = wizard.upload(Side::Front).unwrap().href().to_owned();

    wizard.advance().unwrap();
    assert_eq!(wizard.back(), Ok(Step::Upload));

    assert_eq!(wizard.upload(Side::Front).unwrap().href(), front_href);
    assert!(wizard.upload(Side::Back).is_some());
    assert!(factory.0.released.borrow().is_empty());
}

#[test]
fn results_show_uploads_unchanged() {
    let factory = LedgerFactory(Rc::default());
    let mut wizard = Wizard::new();
    let _ = receive(&factory, &mut wizard, Side::Back, "back.png");
    wizard.advance().unwrap();
    wizard.select_template(TemplateCatalog::default().get("tshirt").unwrap());
    wizard.advance().unwrap();

    let results: Vec<_> = wizard.results().collect();
    assert_eq!(results.len(), 1);
    let (side, upload) = results[0];
    assert_eq!(side, Side::Back);
    assert_eq!(upload.file().bytes(), png_bytes(8, 6).as_slice());
    assert_eq!(upload.info().dimensions.map(|d| (d.width, d.height)), Some((8, 6)));
}

#[test]
fn reset_clears_everything_and_releases_locators() {
    let factory = LedgerFactory(Rc::default());
    let mut wizard = Wizard::new();
    let _ = receive(&factory, &mut wizard, Side::Front, "front.png");
    let _ = receive(&factory, &mut wizard, Side::Back, "back.png");
    wizard.advance().unwrap();
    wizard.select_template(TemplateCatalog::default().get("hoodie").unwrap());
    wizard.advance().unwrap();
    assert_eq!(wizard.step(), Step::Results);

    wizard.reset();

    assert_eq!(wizard.step(), Step::Upload);
    assert!(wizard.upload(Side::Front).is_none());
    assert!(wizard.upload(Side::Back).is_none());
    assert!(wizard.selected_template().is_none());
    assert_eq!(wizard.advance(), Err(WizardError::NoUploads));

    let mut released = factory.0.released.borrow().clone();
    released.sort();
    assert_eq!(released, ["blob:1:front.png", "blob:2:back.png"]);
}

/// One intake event: take the first offered file and accept it.
fn intake(
    factory: &LedgerFactory,
    wizard: &mut Wizard<LedgerHref>,
    offered: Vec<SourceFile>,
    source: IntakeSource,
) -> Option<IntakeSource> {
    let (file, source) = first_offered(offered, source)?;
    let _ = wizard.set_upload(Side::Front, accept(factory, file).unwrap());
    Some(source)
}

#[test]
fn drop_and_picker_produce_equivalent_state() {
    let offered = || {
        vec![
            SourceFile::new("front.png", png_bytes(5, 9)),
            SourceFile::new("ignored.png", png_bytes(2, 2)),
        ]
    };

    let drop_factory = LedgerFactory(Rc::default());
    let mut dropped = Wizard::new();
    let via_drop = intake(&drop_factory, &mut dropped, offered(), IntakeSource::Drop);

    let picker_factory = LedgerFactory(Rc::default());
    let mut picked = Wizard::new();
    let via_picker = intake(&picker_factory, &mut picked, offered(), IntakeSource::Picker);

    assert_eq!(via_drop, Some(IntakeSource::Drop));
    assert_eq!(via_picker, Some(IntakeSource::Picker));

    let a = dropped.upload(Side::Front).unwrap();
    let b = picked.upload(Side::Front).unwrap();
    assert_eq!(a.file().name(), "front.png");
    assert_eq!(a.file(), b.file());
    assert_eq!(a.info(), b.info());
    assert_eq!(a.info().dimensions, Some(Dimensions::new(5, 9)));
    assert_eq!(a.href(), b.href());
    assert_eq!(dropped.can_advance(), picked.can_advance());

    // Only the first file of each event got a locator.
    assert_eq!(*drop_factory.0.created.borrow(), 1);
    assert_eq!(*picker_factory.0.created.borrow(), 1);
}

#[test]
fn empty_intake_event_changes_nothing() {
    let factory = LedgerFactory(Rc::default());
    let mut wizard = Wizard::new();
    for source in [IntakeSource::Drop, IntakeSource::Picker] {
        assert_eq!(intake(&factory, &mut wizard, Vec::new(), source), None);
    }
    assert!(wizard.upload(Side::Front).is_none());
    assert!(!wizard.can_advance());
    assert_eq!(*factory.0.created.borrow(), 0);
}

#[test]
fn replacing_an_upload_releases_the_old_locator_once() {
    let factory = LedgerFactory(Rc::default());
    let mut wizard = Wizard::new();
    let _ = receive(&factory, &mut wizard, Side::Front, "first.png");
    let previous = receive(&factory, &mut wizard, Side::Front, "second.png");
    assert!(factory.0.released.borrow().is_empty());
    drop(previous);
    assert_eq!(*factory.0.released.borrow(), ["blob:1:first.png"]);

    drop(wizard);
    assert_eq!(
        *factory.0.released.borrow(),
        ["blob:1:first.png", "blob:2:second.png"]
    );
}
