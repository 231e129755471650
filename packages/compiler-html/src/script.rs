/// Icon font referenced by the exported page
pub const FONT_AWESOME_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css";

/// Runtime behavior of the exported page: testimonial carousel and
/// contact-form validation. Fixed text, independent of the page state.
pub const EXPORT_SCRIPT: &str = r#"
document.addEventListener('DOMContentLoaded', function () {
    document.querySelectorAll('.testimonials-carousel').forEach(function (carousel) {
        var track = carousel.querySelector('.testimonials-track');
        var items = carousel.querySelectorAll('.testimonial-item');
        var prevBtn = carousel.querySelector('.carousel-prev');
        var nextBtn = carousel.querySelector('.carousel-next');
        var currentIndex = 0;
        function updateCarousel() {
            track.style.transform = 'translateX(-' + (currentIndex * 100) + '%)';
        }
        if (track && prevBtn && nextBtn) {
            prevBtn.addEventListener('click', function () {
                if (currentIndex > 0) {
                    currentIndex--;
                    updateCarousel();
                }
            });
            nextBtn.addEventListener('click', function () {
                if (currentIndex < items.length - 1) {
                    currentIndex++;
                    updateCarousel();
                }
            });
        }
    });
    document.querySelectorAll('.contact-form').forEach(function (form) {
        form.addEventListener('submit', function (e) {
            e.preventDefault();
            var isValid = true;
            form.querySelectorAll('input, textarea').forEach(function (input) {
                var errorElement = form.querySelector('#error-' + input.id);
                if (input.value.trim() === '') {
                    isValid = false;
                    input.style.borderColor = '#e53e3e';
                    if (errorElement) { errorElement.style.display = 'block'; }
                } else {
                    input.style.borderColor = '';
                    if (errorElement) { errorElement.style.display = 'none'; }
                }
            });
            var emailInput = form.querySelector('input[type="email"]');
            if (emailInput && emailInput.value.trim() !== '') {
                var emailPattern = /^[^\s@]+@[^\s@]+\.[^\s@]+$/;
                if (!emailPattern.test(emailInput.value)) {
                    isValid = false;
                    emailInput.style.borderColor = '#e53e3e';
                    var emailError = form.querySelector('#error-' + emailInput.id);
                    if (emailError) {
                        emailError.textContent = 'Por favor, insira um email válido.';
                        emailError.style.display = 'block';
                    }
                }
            }
            if (isValid) {
                var successElement = form.querySelector('.form-success');
                if (successElement) {
                    successElement.style.display = 'block';
                    form.reset();
                    setTimeout(function () {
                        successElement.style.display = 'none';
                    }, 5000);
                }
            }
        });
    });
});
"#;
