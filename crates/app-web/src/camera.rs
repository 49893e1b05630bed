use crate::dom;
use anyhow::anyhow;
use app_core::MotionFrame;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

// HTMLMediaElement.HAVE_CURRENT_DATA
const HAVE_CURRENT_DATA: u16 = 2;

/// Webcam stream played into a hidden video element and downscaled onto a
/// small canvas whenever a frame is requested.
pub struct Camera {
    video: web::HtmlVideoElement,
    ctx: web::CanvasRenderingContext2d,
    width: u32,
    height: u32,
}

impl Camera {
    pub async fn start(document: &web::Document, width: u32, height: u32) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        let devices = window
            .navigator()
            .media_devices()
            .map_err(|e| anyhow!("mediaDevices unavailable: {:?}", e))?;

        let constraints = web::MediaStreamConstraints::new();
        constraints.set_video(&JsValue::TRUE);
        constraints.set_audio(&JsValue::FALSE);
        let promise = devices
            .get_user_media_with_constraints(&constraints)
            .map_err(|e| anyhow!("getUserMedia: {:?}", e))?;
        let stream = JsFuture::from(promise)
            .await
            .map_err(|e| anyhow!("camera denied: {:?}", e))?
            .dyn_into::<web::MediaStream>()
            .map_err(|e| anyhow!("{:?}", e))?;

        let video = document
            .create_element("video")
            .map_err(|e| anyhow!("{:?}", e))?
            .dyn_into::<web::HtmlVideoElement>()
            .map_err(|e| anyhow!("{:?}", e))?;
        video.set_muted(true);
        video.set_autoplay(true);
        let _ = video.set_attribute("playsinline", "");
        video.set_src_object(Some(&stream));
        if let Ok(p) = video.play() {
            if let Err(e) = JsFuture::from(p).await {
                log::warn!("[camera] play() rejected: {:?}", e);
            }
        }

        let canvas = dom::create_canvas(document, width, height)?;
        let ctx = dom::context_2d(&canvas)?;
        log::info!("[camera] streaming, sampling at {}x{}", width, height);
        Ok(Self {
            video,
            ctx,
            width,
            height,
        })
    }

    /// Latest frame at capture resolution, or None until the stream has data.
    pub fn grab(&self) -> Option<MotionFrame> {
        if self.video.ready_state() < HAVE_CURRENT_DATA {
            return None;
        }
        let (w, h) = (self.width as f64, self.height as f64);
        self.ctx
            .draw_image_with_html_video_element_and_dw_and_dh(&self.video, 0.0, 0.0, w, h)
            .ok()?;
        let data = self.ctx.get_image_data(0.0, 0.0, w, h).ok()?;
        MotionFrame::new(self.width, self.height, data.data().0)
    }
}
