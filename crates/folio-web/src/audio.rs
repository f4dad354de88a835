use web_sys as web;

/// One-shot hover chime. Holds the decoded buffer and a master gain so every
/// playback shares one volume knob.
pub struct HoverChime {
    audio_ctx: web::AudioContext,
    master: web::GainNode,
    buffer: Option<web::AudioBuffer>,
}

fn create_gain(
    audio_ctx: &web::AudioContext,
    value: f32,
    label: &str,
) -> Result<web::GainNode, ()> {
    match web::GainNode::new(audio_ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Ok(g)
        }
        Err(e) => {
            log::error!("{} GainNode error: {:?}", label, e);
            Err(())
        }
    }
}

impl HoverChime {
    pub fn new(audio_ctx: web::AudioContext) -> Result<Self, ()> {
        let master = create_gain(&audio_ctx, 0.35, "Chime master")?;
        _ = master.connect_with_audio_node(&audio_ctx.destination());
        Ok(HoverChime {
            audio_ctx,
            master,
            buffer: None,
        })
    }

    pub fn set_buffer(&mut self, buffer: Option<web::AudioBuffer>) {
        self.buffer = buffer;
    }

    /// Browsers keep the context suspended until a user gesture; call this
    /// from the first pointerdown.
    pub fn resume(&self) {
        _ = self.audio_ctx.resume();
    }

    /// Fire the chime once. Without a decoded buffer this is silent, which is
    /// the polite failure mode for a missing asset.
    pub fn play(&self) {
        let Some(buffer) = &self.buffer else { return };
        if let Ok(src) = web::AudioBufferSourceNode::new(&self.audio_ctx) {
            src.set_buffer(Some(buffer));
            if let Ok(g) = web::GainNode::new(&self.audio_ctx) {
                // Tiny attack ramp so a non-zero first sample cannot click.
                let now = self.audio_ctx.current_time();
                g.gain().set_value(0.0);
                _ = g.gain().linear_ramp_to_value_at_time(1.0, now + 0.01);
                _ = src.connect_with_audio_node(&g);
                _ = g.connect_with_audio_node(&self.master);
                _ = src.start();
            }
        }
    }
}
