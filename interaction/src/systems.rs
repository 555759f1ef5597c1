#[allow(clippy::wildcard_imports)]
use bevy_ecs::prelude::*;

use crate::{
    context::ViewerContext,
    session::{SessionEvent, SessionProvider},
};

// ============================================================================
// Shared Interaction Systems
// ============================================================================

// Watch the provider's presenting flag, announce start/end once per change and
// refresh which UI layer is visible.
pub fn session_lifecycle_system<S: SessionProvider + Resource>(
    session: Res<S>,
    mut ctx: ResMut<ViewerContext>,
    mut events: MessageWriter<SessionEvent>,
) {
    let presenting = session.is_presenting();
    if presenting == ctx.is_presenting() {
        return;
    }

    ctx.set_presenting(presenting);
    events.write(if presenting {
        SessionEvent::Started
    } else {
        SessionEvent::Ended
    });
}
